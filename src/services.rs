pub mod contato_service;
pub use contato_service::ContatoService;
pub mod regiao_service;
pub use regiao_service::RegiaoService;
