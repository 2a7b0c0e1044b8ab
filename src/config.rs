// src/config.rs

use crate::{
    db::{ContatoRepository, PgContatoRepository, PgRegiaoRepository, RegiaoRepository},
    services::{ContatoService, RegiaoService},
};
use anyhow::{anyhow, Context};
use sqlx::postgres::PgPoolOptions;
use std::{env, str::FromStr, sync::Arc, time::Duration};

// Modo de execução. O Swagger só é exposto em desenvolvimento.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(anyhow!("APP_ENV inválido: '{}'", other)),
        }
    }
}

// Configuração do processo, lida uma vez na inicialização
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub environment: Environment,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado do `from_env` para os testes não dependerem do ambiente real
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let environment = match lookup("APP_ENV") {
            Some(value) => value.parse()?,
            None => Environment::Production,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: '{}'", value))?,
            None => 5,
        };

        let db_acquire_timeout = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(
                value
                    .parse()
                    .with_context(|| format!("DB_ACQUIRE_TIMEOUT_SECS inválido: '{}'", value))?,
            ),
            None => Duration::from_secs(3),
        };

        Ok(Self {
            database_url,
            server_addr,
            environment,
            db_max_connections,
            db_acquire_timeout,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub contato_service: ContatoService,
    pub regiao_service: RegiaoService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let contatos = Arc::new(PgContatoRepository::new(db_pool.clone()));
        let regioes = Arc::new(PgRegiaoRepository::new(db_pool));

        Ok(Self::from_repositories(contatos, regioes))
    }

    pub fn from_repositories(
        contatos: Arc<dyn ContatoRepository>,
        regioes: Arc<dyn RegiaoRepository>,
    ) -> Self {
        Self {
            contato_service: ContatoService::new(contatos, regioes.clone()),
            regiao_service: RegiaoService::new(regioes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn usa_padroes_quando_so_ha_database_url() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/agenda")]).unwrap();

        assert_eq!(config.server_addr, "0.0.0.0:3000");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_acquire_timeout, Duration::from_secs(3));
    }

    #[test]
    fn database_url_e_obrigatoria() {
        assert!(config(&[("APP_ENV", "development")]).is_err());
    }

    #[test]
    fn le_ambiente_e_pool() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/agenda"),
            ("APP_ENV", "Development"),
            ("DB_MAX_CONNECTIONS", "10"),
            ("SERVER_ADDR", "127.0.0.1:8080"),
        ])
        .unwrap();

        assert!(config.environment.is_development());
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.server_addr, "127.0.0.1:8080");
    }

    #[test]
    fn rejeita_valores_invalidos() {
        assert!(config(&[("DATABASE_URL", "x"), ("APP_ENV", "staging")]).is_err());
        assert!(config(&[("DATABASE_URL", "x"), ("DB_MAX_CONNECTIONS", "muitas")]).is_err());
    }
}
