// src/handlers/contato.rs

use axum::{
    extract::{MatchedPath, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{error::AppError, extractor::ValidatedJson},
    config::AppState,
    models::contato::{Contato, ContatoDto, ContatoInput, ContatoUpdateInput},
};

// GET /Contato/ListarContatos
#[utoipa::path(
    get,
    path = "/Contato/ListarContatos",
    tag = "Contato",
    responses(
        (status = 200, description = "Lista de contatos", body = Vec<ContatoDto>),
        (status = 400, description = "Erro ao listar contatos", body = String)
    )
)]
pub async fn listar_contatos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let contatos = app_state.contato_service.listar_contatos().await?;

    Ok((StatusCode::OK, Json(contatos)))
}

// GET /Contato/ListarContatoPorTelefone/{telefone}
// Sem correspondência a resposta é 204, sem corpo.
#[utoipa::path(
    get,
    path = "/Contato/ListarContatoPorTelefone/{telefone}",
    tag = "Contato",
    params(
        ("telefone" = String, Path, description = "Número de telefone do contato")
    ),
    responses(
        (status = 200, description = "Contato encontrado", body = Contato),
        (status = 204, description = "Nenhum contato com esse telefone"),
        (status = 400, description = "Erro ao buscar contato", body = String)
    )
)]
pub async fn listar_contato_por_telefone(
    State(app_state): State<AppState>,
    Path(telefone): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let contato = app_state.contato_service.buscar_por_telefone(&telefone).await?;

    Ok(match contato {
        Some(contato) => (StatusCode::OK, Json(contato)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

// GET /Contato/ListarContatosPorDDD/{ddd}
#[utoipa::path(
    get,
    path = "/Contato/ListarContatosPorDDD/{ddd}",
    tag = "Contato",
    params(
        ("ddd" = i32, Path, description = "Código de DDD da região")
    ),
    responses(
        (status = 200, description = "Contatos do DDD", body = Vec<Contato>),
        (status = 404, description = "Nenhum contato encontrado para o DDD informado", body = String),
        (status = 400, description = "Erro ao listar contatos por DDD", body = String)
    )
)]
pub async fn listar_contatos_por_ddd(
    State(app_state): State<AppState>,
    Path(ddd): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let contatos = app_state.contato_service.listar_por_ddd(ddd).await?;

    Ok((StatusCode::OK, Json(contatos)))
}

// POST /Contato/CadastrarContato
#[utoipa::path(
    post,
    path = "/Contato/CadastrarContato",
    tag = "Contato",
    request_body = ContatoInput,
    responses(
        (status = 200, description = "Cadastro realizado com sucesso"),
        (status = 400, description = "DDD não Existente ou dados inválidos", body = String)
    )
)]
pub async fn cadastrar_contato(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContatoInput>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contato_service.cadastrar_contato(payload).await?;

    Ok(StatusCode::OK)
}

// PUT /Contato/AlterarContato
#[utoipa::path(
    put,
    path = "/Contato/AlterarContato",
    tag = "Contato",
    request_body = ContatoUpdateInput,
    responses(
        (status = 200, description = "Contato atualizado com sucesso", body = String),
        (status = 404, description = "Nome não encontrado", body = String),
        (status = 400, description = "Erro ao atualizar o contato", body = String)
    )
)]
pub async fn alterar_contato(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContatoUpdateInput>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contato_service.alterar_contato(payload).await?;

    Ok((StatusCode::OK, "Contato atualizado com sucesso"))
}

// DELETE /Contato/{nome}
#[utoipa::path(
    delete,
    path = "/Contato/{nome}",
    tag = "Contato",
    params(
        ("nome" = String, Path, description = "Nome do contato a ser excluído")
    ),
    responses(
        (status = 200, description = "Contato excluído"),
        (status = 400, description = "Erro ao excluir o contato", body = String)
    )
)]
pub async fn deletar_contato(
    State(app_state): State<AppState>,
    Path(nome): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contato_service.deletar_por_nome(&nome).await?;

    Ok(StatusCode::OK)
}

// DELETE /Contato/ListarContatos, /Contato/CadastrarContato, /Contato/AlterarContato
// Um contato pode ter o mesmo nome de uma rota fixa, e a rota fixa vence o `{nome}`.
// Então o DELETE também fica registrado nelas e o nome sai do próprio caminho.
pub async fn deletar_contato_homonimo(
    State(app_state): State<AppState>,
    caminho: MatchedPath,
) -> Result<impl IntoResponse, AppError> {
    let nome = caminho.as_str().rsplit('/').next().unwrap_or_default();

    app_state.contato_service.deletar_por_nome(nome).await?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::{
        models::contato::{Contato, ContatoDto},
        routes::test_support::server,
    };

    async fn server_com_ddd_11() -> TestServer {
        let server = server();
        server
            .post("/Regiao/CadastrarDDD")
            .json(&json!({ "DDD": 11, "Cidade": "São Paulo" }))
            .await
            .assert_status_ok();
        server
    }

    async fn cadastrar_ana(server: &TestServer) {
        server
            .post("/Contato/CadastrarContato")
            .json(&json!({ "NomeContato": "Ana", "DDD": 11, "Telefone": "999", "Email": "a@x.com" }))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn contato_cadastrado_aparece_na_busca_por_ddd() {
        let server = server_com_ddd_11().await;
        cadastrar_ana(&server).await;

        let response = server.get("/Contato/ListarContatosPorDDD/11").await;
        response.assert_status_ok();

        let contatos: Vec<Contato> = response.json();
        assert_eq!(contatos.len(), 1);
        assert_eq!(contatos[0].nome_contato, "Ana");
        assert_eq!(contatos[0].id_regiao, 1);
    }

    #[tokio::test]
    async fn ddd_nao_cadastrado_retorna_400_e_nao_grava() {
        let server = server_com_ddd_11().await;

        let response = server
            .post("/Contato/CadastrarContato")
            .json(&json!({ "nomeContato": "Bia", "ddd": 21, "telefone": "888", "email": "b@x.com" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_text("DDD não Existente");

        let contatos: Vec<ContatoDto> = server.get("/Contato/ListarContatos").await.json();
        assert!(contatos.is_empty());
    }

    #[tokio::test]
    async fn ddd_sem_contatos_retorna_404() {
        let server = server_com_ddd_11().await;

        let response = server.get("/Contato/ListarContatosPorDDD/11").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text("Nenhum contato encontrado para o DDD informado");
    }

    #[tokio::test]
    async fn listagem_usa_o_formato_reduzido() {
        let server = server_com_ddd_11().await;
        cadastrar_ana(&server).await;

        let contatos: Vec<Value> = server.get("/Contato/ListarContatos").await.json();
        assert_eq!(contatos.len(), 1);
        assert_eq!(contatos[0]["nomeContato"], "Ana");
        assert_eq!(contatos[0]["ddd"], 11);
        assert!(contatos[0].get("idRegiao").is_none());
    }

    #[tokio::test]
    async fn busca_por_telefone_devolve_a_entidade_ou_204() {
        let server = server_com_ddd_11().await;
        cadastrar_ana(&server).await;

        let response = server.get("/Contato/ListarContatoPorTelefone/999").await;
        response.assert_status_ok();
        let contato: Value = response.json();
        assert_eq!(contato["nomeContato"], "Ana");
        assert_eq!(contato["idRegiao"], 1);

        server
            .get("/Contato/ListarContatoPorTelefone/000")
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn alteracao_por_nome_sobrescreve_os_campos() {
        let server = server_com_ddd_11().await;
        cadastrar_ana(&server).await;

        let response = server
            .put("/Contato/AlterarContato")
            .json(&json!({ "NomeContato": "Ana", "DDD": 11, "Telefone": "777", "Email": "ana@novo.com" }))
            .await;
        response.assert_status_ok();
        response.assert_text("Contato atualizado com sucesso");

        let contatos: Vec<ContatoDto> = server.get("/Contato/ListarContatos").await.json();
        assert_eq!(contatos.len(), 1);
        assert_eq!(contatos[0].telefone, "777");
        assert_eq!(contatos[0].email, "ana@novo.com");
    }

    #[tokio::test]
    async fn alteracao_de_nome_inexistente_retorna_404() {
        let server = server_com_ddd_11().await;
        cadastrar_ana(&server).await;

        let response = server
            .put("/Contato/AlterarContato")
            .json(&json!({ "NomeContato": "Bia", "DDD": 11, "Telefone": "777", "Email": "b@x.com" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text("Nome não encontrado");

        let contatos: Vec<ContatoDto> = server.get("/Contato/ListarContatos").await.json();
        assert_eq!(contatos[0].telefone, "999");
    }

    #[tokio::test]
    async fn exclusao_remove_das_listagens() {
        let server = server_com_ddd_11().await;
        cadastrar_ana(&server).await;

        server.delete("/Contato/Ana").await.assert_status_ok();

        let contatos: Vec<ContatoDto> = server.get("/Contato/ListarContatos").await.json();
        assert!(contatos.is_empty());

        // Excluir quem não existe continua sendo 200
        server.delete("/Contato/Ana").await.assert_status_ok();
    }

    #[tokio::test]
    async fn exclusao_alcanca_nomes_iguais_as_rotas_fixas() {
        let server = server_com_ddd_11().await;

        for nome in ["ListarContatos", "CadastrarContato", "AlterarContato"] {
            server
                .post("/Contato/CadastrarContato")
                .json(&json!({ "NomeContato": nome, "DDD": 11, "Telefone": "999", "Email": "a@x.com" }))
                .await
                .assert_status_ok();
        }

        for nome in ["ListarContatos", "CadastrarContato", "AlterarContato"] {
            server.delete(&format!("/Contato/{}", nome)).await.assert_status_ok();
        }

        let contatos: Vec<ContatoDto> = server.get("/Contato/ListarContatos").await.json();
        assert!(contatos.is_empty());
    }

    #[tokio::test]
    async fn email_invalido_e_rejeitado() {
        let server = server_com_ddd_11().await;

        let response = server
            .post("/Contato/CadastrarContato")
            .json(&json!({ "NomeContato": "Ana", "DDD": 11, "Telefone": "999", "Email": "invalido" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "Um ou mais campos são inválidos.");
        assert!(body["details"]["email"].is_array());
    }

    #[tokio::test]
    async fn detalhes_de_validacao_trazem_campos_em_camel_case() {
        let server = server_com_ddd_11().await;

        let response = server
            .post("/Contato/CadastrarContato")
            .json(&json!({ "NomeContato": "", "DDD": 11, "Telefone": "999", "Email": "a@x.com" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert!(body["details"]["nomeContato"].is_array());
        assert!(body["details"].get("nome_contato").is_none());
    }
}
