// src/routes.rs

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::{AppState, Environment},
    docs::ApiDoc,
    handlers,
};

pub fn create_router(app_state: AppState, environment: Environment) -> Router {
    let contato_routes = Router::new()
        .route(
            "/ListarContatos",
            get(handlers::contato::listar_contatos).delete(handlers::contato::deletar_contato_homonimo),
        )
        .route(
            "/ListarContatoPorTelefone/{telefone}",
            get(handlers::contato::listar_contato_por_telefone),
        )
        .route(
            "/ListarContatosPorDDD/{ddd}",
            get(handlers::contato::listar_contatos_por_ddd),
        )
        .route(
            "/CadastrarContato",
            post(handlers::contato::cadastrar_contato).delete(handlers::contato::deletar_contato_homonimo),
        )
        .route(
            "/AlterarContato",
            put(handlers::contato::alterar_contato).delete(handlers::contato::deletar_contato_homonimo),
        )
        .route("/{nome}", delete(handlers::contato::deletar_contato));

    let regiao_routes = Router::new()
        .route("/ListarDDD", get(handlers::regiao::listar_ddd))
        .route("/CadastrarDDD", post(handlers::regiao::cadastrar_ddd));

    // Combina tudo no router principal
    let mut app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/Contato", contato_routes)
        .nest("/Regiao", regiao_routes)
        .with_state(app_state);

    // Documentação interativa apenas em desenvolvimento
    if environment.is_development() {
        tracing::info!("📚 Swagger UI disponível em /swagger-ui");
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app.layer(TraceLayer::new_for_http())
}
