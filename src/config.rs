use std::env;

use anyhow::{bail, Context};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,

    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_backend = match var("MOOD_STORE").as_deref().map(str::trim) {
            None | Some("postgres") => StoreBackend::Postgres,
            Some("memory") => StoreBackend::Memory,
            Some(other) => bail!("MOOD_STORE must be `postgres` or `memory`, got `{other}`"),
        };

        let database_url = var("DATABASE_URL");
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set");
        }

        Ok(Self {
            store_backend,
            database_url,
            database_name: var("DB_NAME"),
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "20".into())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a number")?,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: var("PORT")
                .unwrap_or_else(|| "8080".into())
                .parse()
                .context("PORT must be a number")?,
            cors_origins: var("CORS_ORIGINS")
                .map(|list| {
                    list.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_database_url() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/moods")]).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.db_max_connections, 20);
        assert!(config.database_name.is_none());
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_postgres_requires_database_url() {
        assert!(config_from(&[]).is_err());
    }

    #[test]
    fn test_memory_store_needs_no_database() {
        let config = config_from(&[("MOOD_STORE", "memory"), ("PORT", "9000")]).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_unknown_store_backend_is_rejected() {
        assert!(config_from(&[("MOOD_STORE", "mongo")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = config_from(&[("MOOD_STORE", "memory"), ("PORT", "eighty")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let config = config_from(&[
            ("MOOD_STORE", "memory"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
            ("DB_NAME", "moods"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, ["http://a.test", "http://b.test"]);
        assert_eq!(config.database_name.as_deref(), Some("moods"));
    }
}
