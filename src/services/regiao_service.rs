// src/services/regiao_service.rs

use std::sync::Arc;

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::{RegiaoRepository, Repository},
    models::regiao::{NovaRegiao, Regiao, RegiaoDto, RegiaoInput},
};

#[derive(Clone)]
pub struct RegiaoService {
    repo: Arc<dyn RegiaoRepository>,
}

impl RegiaoService {
    pub fn new(repo: Arc<dyn RegiaoRepository>) -> Self {
        Self { repo }
    }

    pub async fn listar_ddds(&self) -> Result<Vec<RegiaoDto>, AppError> {
        let regioes = self.repo.obter_todos().await?;
        Ok(regioes.into_iter().map(RegiaoDto::from).collect())
    }

    pub async fn cadastrar_ddd(&self, input: RegiaoInput) -> Result<Regiao, AppError> {
        if self.repo.obter_por_ddd(input.ddd).await?.is_some() {
            return Err(AppError::DddJaCadastrado);
        }

        let regiao = self.repo
            .cadastrar(NovaRegiao {
                ddd: input.ddd,
                cidade: input.cidade,
                data_cadastro: Utc::now(),
            })
            .await?;

        tracing::info!("📍 DDD {} cadastrado para {}.", regiao.ddd, regiao.cidade);
        Ok(regiao)
    }
}
