// src/handlers/regiao.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::AppError, extractor::ValidatedJson},
    config::AppState,
    models::regiao::{RegiaoDto, RegiaoInput},
};

// GET /Regiao/ListarDDD
#[utoipa::path(
    get,
    path = "/Regiao/ListarDDD",
    tag = "Regiao",
    responses(
        (status = 200, description = "Lista de DDDs e suas cidades", body = Vec<RegiaoDto>),
        (status = 400, description = "Erro ao listar DDDs", body = String)
    )
)]
pub async fn listar_ddd(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let ddds = app_state.regiao_service.listar_ddds().await?;

    Ok((StatusCode::OK, Json(ddds)))
}

// POST /Regiao/CadastrarDDD
#[utoipa::path(
    post,
    path = "/Regiao/CadastrarDDD",
    tag = "Regiao",
    request_body = RegiaoInput,
    responses(
        (status = 200, description = "DDD cadastrado com sucesso"),
        (status = 400, description = "O DDD informado já está cadastrado ou os dados são inválidos", body = String)
    )
)]
pub async fn cadastrar_ddd(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegiaoInput>,
) -> Result<impl IntoResponse, AppError> {
    app_state.regiao_service.cadastrar_ddd(payload).await?;

    Ok(StatusCode::OK)
}
