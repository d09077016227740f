use crate::error::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
    /// Prefix the product routes are nested under. Either empty or `/segment[/..]`.
    pub base_path: String,
}

#[derive(Debug, Clone)]
pub enum StorageConfig {
    Postgres(DatabaseConfig),
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage = match var_or("STORAGE_BACKEND", "postgres").to_lowercase().as_str() {
            "postgres" => StorageConfig::Postgres(DatabaseConfig {
                url: lookup("DB_URL")
                    .ok_or_else(|| AppError::ConfigError("DB_URL is required".to_string()))?,
                max_connections: var_or("DB_MAX_CONNECTIONS", "20").parse().map_err(|_| {
                    AppError::ConfigError("Invalid DB_MAX_CONNECTIONS value".to_string())
                })?,
                acquire_timeout_secs: var_or("DB_ACQUIRE_TIMEOUT_SECS", "5").parse().map_err(
                    |_| AppError::ConfigError("Invalid DB_ACQUIRE_TIMEOUT_SECS value".to_string()),
                )?,
            }),
            "memory" => StorageConfig::Memory,
            other => {
                return Err(AppError::ConfigError(format!(
                    "Unknown STORAGE_BACKEND: {}",
                    other
                )));
            }
        };

        Ok(Self {
            server: ServerConfig {
                host: var_or("HOST", "0.0.0.0"),
                port: var_or("PORT", "3000")
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: var_or("MAX_BODY_SIZE", "1048576")
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
                base_path: normalize_base_path(&var_or("API_BASE_PATH", "/api")),
            },
            storage,
            cors: CorsConfig {
                allowed_origins: lookup("FRONTEND_URL")
                    .map(|urls| {
                        urls.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_database_url() {
        let config = config_from(&[("DB_URL", "postgres://localhost/products")]).unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.server.base_path, "/api");
        assert!(config.cors.allowed_origins.is_empty());
        match config.storage {
            StorageConfig::Postgres(db) => {
                assert_eq!(db.url, "postgres://localhost/products");
                assert_eq!(db.max_connections, 20);
                assert_eq!(db.acquire_timeout_secs, 5);
            }
            StorageConfig::Memory => panic!("expected postgres storage"),
        }
    }

    #[test]
    fn postgres_requires_database_url() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let config = config_from(&[("STORAGE_BACKEND", "Memory")]).unwrap();
        assert!(matches!(config.storage, StorageConfig::Memory));
    }

    #[test]
    fn rejects_unknown_backend_and_bad_port() {
        assert!(config_from(&[("STORAGE_BACKEND", "cassandra")]).is_err());
        assert!(config_from(&[("STORAGE_BACKEND", "memory"), ("PORT", "http")]).is_err());
    }

    #[test]
    fn splits_cors_origins() {
        let config = config_from(&[
            ("STORAGE_BACKEND", "memory"),
            ("FRONTEND_URL", "http://a.test, http://b.test,"),
        ])
        .unwrap();
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn normalizes_base_path() {
        assert_eq!(normalize_base_path("api/"), "/api");
        assert_eq!(normalize_base_path("/v1/shop/"), "/v1/shop");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path(""), "");
    }
}
