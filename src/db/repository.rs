// src/db/repository.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::{
        contato::{Contato, NovoContato},
        regiao::{NovaRegiao, Regiao},
    },
};

/// Operações comuns a toda entidade persistida.
/// `T` é a linha lida do banco e `N` o que é preciso para inseri-la.
#[async_trait]
pub trait Repository<T, N>: Send + Sync {
    async fn obter_todos(&self) -> Result<Vec<T>, AppError>;

    /// Insere e devolve a linha com o id gerado pelo banco.
    async fn cadastrar(&self, novo: N) -> Result<T, AppError>;
}

#[async_trait]
pub trait RegiaoRepository: Repository<Regiao, NovaRegiao> {
    async fn obter_por_ddd(&self, ddd: i32) -> Result<Option<Regiao>, AppError>;
}

#[async_trait]
pub trait ContatoRepository: Repository<Contato, NovoContato> {
    async fn obter_por_telefone(&self, telefone: &str) -> Result<Option<Contato>, AppError>;

    async fn obter_por_ddd(&self, ddd: i32) -> Result<Vec<Contato>, AppError>;

    /// Primeiro contato com esse nome, pela ordem do id.
    async fn obter_por_nome(&self, nome: &str) -> Result<Option<Contato>, AppError>;

    /// Sobrescreve nome, DDD, telefone e e-mail da linha `contato.id`.
    async fn alterar(&self, contato: &Contato) -> Result<(), AppError>;

    /// Remove o primeiro contato com esse nome. Não encontrar nada não é erro.
    async fn deletar_por_nome(&self, nome: &str) -> Result<(), AppError>;
}
