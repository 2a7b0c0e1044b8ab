//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod routes;
mod services;

use crate::config::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Carrega .env e variáveis de ambiente antes do logger, para RUST_LOG valer
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    tracing::info!("Iniciando em modo {:?}", config.environment);

    // Se a configuração ou o banco falharem, a aplicação não deve iniciar.
    let app_state = AppState::new(&config).await?;

    let app = routes::create_router(app_state, config.environment);

    // Inicia o servidor
    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
