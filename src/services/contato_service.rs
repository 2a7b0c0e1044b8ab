// src/services/contato_service.rs

use std::sync::Arc;

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::{ContatoRepository, RegiaoRepository, Repository},
    models::contato::{Contato, ContatoDto, ContatoInput, ContatoUpdateInput, NovoContato},
};

#[derive(Clone)]
pub struct ContatoService {
    contatos: Arc<dyn ContatoRepository>,
    regioes: Arc<dyn RegiaoRepository>,
}

impl ContatoService {
    pub fn new(contatos: Arc<dyn ContatoRepository>, regioes: Arc<dyn RegiaoRepository>) -> Self {
        Self { contatos, regioes }
    }

    pub async fn listar_contatos(&self) -> Result<Vec<ContatoDto>, AppError> {
        let contatos = self.contatos.obter_todos().await?;
        Ok(contatos.into_iter().map(ContatoDto::from).collect())
    }

    // Devolve a entidade inteira, não o DTO da listagem
    pub async fn buscar_por_telefone(&self, telefone: &str) -> Result<Option<Contato>, AppError> {
        self.contatos.obter_por_telefone(telefone).await
    }

    pub async fn listar_por_ddd(&self, ddd: i32) -> Result<Vec<Contato>, AppError> {
        let contatos = self.contatos.obter_por_ddd(ddd).await?;

        if contatos.is_empty() {
            return Err(AppError::ContatosNaoEncontrados);
        }

        Ok(contatos)
    }

    /// Cadastra o contato desde que o DDD pertença a uma região cadastrada.
    /// O id da região é copiado para o contato nesse momento.
    pub async fn cadastrar_contato(&self, input: ContatoInput) -> Result<Contato, AppError> {
        let regiao = self.regioes
            .obter_por_ddd(input.ddd)
            .await?
            .ok_or(AppError::DddNaoExistente)?;

        let contato = self.contatos
            .cadastrar(NovoContato {
                nome_contato: input.nome_contato,
                telefone: input.telefone,
                email: input.email,
                ddd: input.ddd,
                id_regiao: regiao.id_regiao,
                data_cadastro: Utc::now(),
            })
            .await?;

        tracing::info!("👤 Contato '{}' cadastrado no DDD {}.", contato.nome_contato, contato.ddd);
        Ok(contato)
    }

    /// Alteração pelo nome: o primeiro contato com `nome_contato` recebe todos os
    /// campos do input. O novo DDD não é conferido contra as regiões.
    pub async fn alterar_contato(&self, input: ContatoUpdateInput) -> Result<Contato, AppError> {
        let mut contato = self.contatos
            .obter_por_nome(&input.nome_contato)
            .await?
            .ok_or(AppError::NomeNaoEncontrado)?;

        contato.nome_contato = input.nome_contato;
        contato.ddd = input.ddd;
        contato.telefone = input.telefone;
        contato.email = input.email;

        self.contatos.alterar(&contato).await?;

        tracing::info!("✏️ Contato '{}' atualizado.", contato.nome_contato);
        Ok(contato)
    }

    pub async fn deletar_por_nome(&self, nome: &str) -> Result<(), AppError> {
        self.contatos.deletar_por_nome(nome).await?;
        tracing::info!("🗑️ Exclusão solicitada para o contato '{}'.", nome);
        Ok(())
    }
}
