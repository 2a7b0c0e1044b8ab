// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// O único tipo de erro da aplicação. Repositórios, serviços e handlers
// devolvem `AppError` e o `IntoResponse` abaixo decide status e corpo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("O DDD informado já está cadastrado.")]
    DddJaCadastrado,

    #[error("DDD não Existente")]
    DddNaoExistente,

    #[error("Nenhum contato encontrado para o DDD informado")]
    ContatosNaoEncontrados,

    #[error("Nome não encontrado")]
    NomeNaoEncontrado,

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Corpo JSON malformado ou com tipos errados
    #[error("{0}")]
    JsonInvalido(String),

    #[error("{0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("{0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(nome_do_campo_json(&field), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::ContatosNaoEncontrados | AppError::NomeNaoEncontrado => StatusCode::NOT_FOUND,
            AppError::DddJaCadastrado | AppError::DddNaoExistente | AppError::JsonInvalido(_) => {
                StatusCode::BAD_REQUEST
            }

            // Falhas de banco e inesperadas também viram 400 com a mensagem crua.
            e @ (AppError::DatabaseError(_) | AppError::InternalServerError(_)) => {
                tracing::error!("Falha ao processar a requisição: {}", e);
                StatusCode::BAD_REQUEST
            }
        };

        (status, self.to_string()).into_response()
    }
}

// Os campos chegam com o nome do Rust (`nome_contato`); o JSON usa camelCase.
fn nome_do_campo_json(campo: &str) -> String {
    let mut nome = String::with_capacity(campo.len());
    let mut maiuscula = false;
    for c in campo.chars() {
        if c == '_' {
            maiuscula = true;
        } else if maiuscula {
            nome.extend(c.to_uppercase());
            maiuscula = false;
        } else {
            nome.push(c);
        }
    }
    nome
}
