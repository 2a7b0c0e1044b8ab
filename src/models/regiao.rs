// src/models/regiao.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Representa uma linha da tabela 'regiao'
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Regiao {
    pub id_regiao: i32,

    #[schema(example = 11)]
    pub ddd: i32,

    #[schema(example = "São Paulo")]
    pub cidade: String,

    pub data_cadastro: DateTime<Utc>,
}

// Dados para inserir uma região (o id vem do banco)
#[derive(Debug, Clone)]
pub struct NovaRegiao {
    pub ddd: i32,
    pub cidade: String,
    pub data_cadastro: DateTime<Utc>,
}

// Payload de POST /Regiao/CadastrarDDD
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegiaoInput {
    #[serde(alias = "DDD", alias = "Ddd")]
    #[validate(range(min = 11, max = 99, message = "O DDD deve estar entre 11 e 99."))]
    #[schema(example = 11)]
    pub ddd: i32,

    #[serde(alias = "Cidade")]
    #[validate(length(min = 1, message = "A cidade é obrigatória."))]
    #[schema(example = "São Paulo")]
    pub cidade: String,
}

// Formato da listagem de DDDs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegiaoDto {
    #[schema(example = 11)]
    pub ddd: i32,

    #[schema(example = "São Paulo")]
    pub cidade: String,
}

impl From<Regiao> for RegiaoDto {
    fn from(regiao: Regiao) -> Self {
        Self {
            ddd: regiao.ddd,
            cidade: regiao.cidade,
        }
    }
}
