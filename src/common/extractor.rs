// src/common/extractor.rs

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::common::error::AppError;

/// Extrator de JSON que já roda as regras do `validator`.
/// Tanto o corpo malformado quanto o payload inválido viram `AppError`,
/// então os handlers não precisam chamar `validate()` na mão.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::JsonInvalido(mensagem_de_rejeicao(rejection)))?;

        payload.validate()?;

        Ok(Self(payload))
    }
}

fn mensagem_de_rejeicao(rejection: JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("JSON com dados inválidos: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => format!("JSON malformado: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "O cabeçalho Content-Type deve ser application/json.".to_string()
        }
        other => other.body_text(),
    }
}
