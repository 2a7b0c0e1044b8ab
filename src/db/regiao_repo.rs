// src/db/regiao_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::repository::{RegiaoRepository, Repository},
    models::regiao::{NovaRegiao, Regiao},
};

// O repositório de regiões, responsável por todas as interações com a tabela 'regiao'
#[derive(Clone)]
pub struct PgRegiaoRepository {
    pool: PgPool,
}

impl PgRegiaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Dois cadastros simultâneos do mesmo DDD passam pela checagem prévia;
// o UNIQUE da tabela barra o segundo.
fn erro_de_insercao(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::DddJaCadastrado;
        }
    }
    e.into()
}

#[async_trait]
impl Repository<Regiao, NovaRegiao> for PgRegiaoRepository {
    async fn obter_todos(&self) -> Result<Vec<Regiao>, AppError> {
        let regioes = sqlx::query_as::<_, Regiao>(
            "SELECT id_regiao, ddd, cidade, data_cadastro FROM regiao",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(regioes)
    }

    async fn cadastrar(&self, nova: NovaRegiao) -> Result<Regiao, AppError> {
        sqlx::query_as::<_, Regiao>(
            r#"
            INSERT INTO regiao (ddd, cidade, data_cadastro)
            VALUES ($1, $2, $3)
            RETURNING id_regiao, ddd, cidade, data_cadastro
            "#,
        )
        .bind(nova.ddd)
        .bind(&nova.cidade)
        .bind(nova.data_cadastro)
        .fetch_one(&self.pool)
        .await
        .map_err(erro_de_insercao)
    }
}

#[async_trait]
impl RegiaoRepository for PgRegiaoRepository {
    async fn obter_por_ddd(&self, ddd: i32) -> Result<Option<Regiao>, AppError> {
        let regiao = sqlx::query_as::<_, Regiao>(
            "SELECT id_regiao, ddd, cidade, data_cadastro FROM regiao WHERE ddd = $1 LIMIT 1",
        )
        .bind(ddd)
        .fetch_optional(&self.pool)
        .await?;

        Ok(regiao)
    }
}
