// src/db/contato_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::repository::{ContatoRepository, Repository},
    models::contato::{Contato, NovoContato},
};

const COLUNAS: &str = "id, data_cadastro, nome_contato, telefone, email, ddd, id_regiao";

// O repositório de contatos, responsável por todas as interações com a tabela 'contato'
#[derive(Clone)]
pub struct PgContatoRepository {
    pool: PgPool,
}

impl PgContatoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Contato, NovoContato> for PgContatoRepository {
    async fn obter_todos(&self) -> Result<Vec<Contato>, AppError> {
        let contatos = sqlx::query_as::<_, Contato>(&format!("SELECT {COLUNAS} FROM contato"))
            .fetch_all(&self.pool)
            .await?;

        Ok(contatos)
    }

    async fn cadastrar(&self, novo: NovoContato) -> Result<Contato, AppError> {
        let contato = sqlx::query_as::<_, Contato>(&format!(
            r#"
            INSERT INTO contato (data_cadastro, nome_contato, telefone, email, ddd, id_regiao)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(novo.data_cadastro)
        .bind(&novo.nome_contato)
        .bind(&novo.telefone)
        .bind(&novo.email)
        .bind(novo.ddd)
        .bind(novo.id_regiao)
        .fetch_one(&self.pool)
        .await?;

        Ok(contato)
    }
}

#[async_trait]
impl ContatoRepository for PgContatoRepository {
    async fn obter_por_telefone(&self, telefone: &str) -> Result<Option<Contato>, AppError> {
        let contato = sqlx::query_as::<_, Contato>(&format!(
            "SELECT {COLUNAS} FROM contato WHERE telefone = $1 ORDER BY id LIMIT 1"
        ))
        .bind(telefone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contato)
    }

    async fn obter_por_ddd(&self, ddd: i32) -> Result<Vec<Contato>, AppError> {
        let contatos = sqlx::query_as::<_, Contato>(&format!(
            "SELECT {COLUNAS} FROM contato WHERE ddd = $1"
        ))
        .bind(ddd)
        .fetch_all(&self.pool)
        .await?;

        Ok(contatos)
    }

    async fn obter_por_nome(&self, nome: &str) -> Result<Option<Contato>, AppError> {
        let contato = sqlx::query_as::<_, Contato>(&format!(
            "SELECT {COLUNAS} FROM contato WHERE nome_contato = $1 ORDER BY id LIMIT 1"
        ))
        .bind(nome)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contato)
    }

    async fn alterar(&self, contato: &Contato) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE contato
            SET nome_contato = $2, ddd = $3, telefone = $4, email = $5
            WHERE id = $1
            "#,
        )
        .bind(contato.id)
        .bind(&contato.nome_contato)
        .bind(contato.ddd)
        .bind(&contato.telefone)
        .bind(&contato.email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn deletar_por_nome(&self, nome: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM contato
            WHERE id = (
                SELECT id FROM contato WHERE nome_contato = $1 ORDER BY id LIMIT 1
            )
            "#,
        )
        .bind(nome)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Contato '{}' removido ({} linha(s)).", nome, result.rows_affected());
        Ok(())
    }
}
