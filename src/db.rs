pub mod repository;
pub use repository::{ContatoRepository, RegiaoRepository, Repository};
pub mod contato_repo;
pub use contato_repo::PgContatoRepository;
pub mod regiao_repo;
pub use regiao_repo::PgRegiaoRepository;

#[cfg(test)]
pub mod memory;
