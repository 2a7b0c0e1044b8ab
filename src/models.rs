pub mod contato;
pub mod regiao;
