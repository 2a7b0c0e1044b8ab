// src/models/contato.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Representa uma linha da tabela 'contato'.
// É também o formato "cru" devolvido pelas buscas por telefone e por DDD.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contato {
    pub id: i32,

    pub data_cadastro: DateTime<Utc>,

    #[schema(example = "Ana")]
    pub nome_contato: String,

    #[schema(example = "99999-8888")]
    pub telefone: String,

    #[schema(example = "ana@email.com")]
    pub email: String,

    #[schema(example = 11)]
    pub ddd: i32,

    // Capturado da região no cadastro, não é revalidado na alteração
    pub id_regiao: i32,
}

// Dados para inserir um contato (o id vem do banco)
#[derive(Debug, Clone)]
pub struct NovoContato {
    pub nome_contato: String,
    pub telefone: String,
    pub email: String,
    pub ddd: i32,
    pub id_regiao: i32,
    pub data_cadastro: DateTime<Utc>,
}

// Payload de POST /Contato/CadastrarContato
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContatoInput {
    #[serde(alias = "NomeContato")]
    #[validate(length(min = 1, message = "O nome do contato é obrigatório."))]
    #[schema(example = "Ana")]
    pub nome_contato: String,

    #[serde(alias = "DDD", alias = "Ddd")]
    #[validate(range(min = 11, max = 99, message = "O DDD deve estar entre 11 e 99."))]
    #[schema(example = 11)]
    pub ddd: i32,

    #[serde(alias = "Telefone")]
    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    #[schema(example = "99999-8888")]
    pub telefone: String,

    #[serde(alias = "Email")]
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "ana@email.com")]
    pub email: String,
}

// Payload de PUT /Contato/AlterarContato.
// O nome é a chave de busca e também o novo valor gravado.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContatoUpdateInput {
    #[serde(alias = "NomeContato")]
    #[validate(length(min = 1, message = "O nome do contato é obrigatório."))]
    #[schema(example = "Ana")]
    pub nome_contato: String,

    #[serde(alias = "DDD", alias = "Ddd")]
    #[validate(range(min = 11, max = 99, message = "O DDD deve estar entre 11 e 99."))]
    #[schema(example = 21)]
    pub ddd: i32,

    #[serde(alias = "Telefone")]
    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    #[schema(example = "98888-7777")]
    pub telefone: String,

    #[serde(alias = "Email")]
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "ana@novoemail.com")]
    pub email: String,
}

// Formato da listagem geral de contatos
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContatoDto {
    #[schema(example = "Ana")]
    pub nome_contato: String,

    #[schema(example = 11)]
    pub ddd: i32,

    #[schema(example = "99999-8888")]
    pub telefone: String,

    #[schema(example = "ana@email.com")]
    pub email: String,

    pub data_cadastro: DateTime<Utc>,
}

impl From<Contato> for ContatoDto {
    fn from(contato: Contato) -> Self {
        Self {
            nome_contato: contato.nome_contato,
            ddd: contato.ddd,
            telefone: contato.telefone,
            email: contato.email,
            data_cadastro: contato.data_cadastro,
        }
    }
}
