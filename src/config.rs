use std::env;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3002;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration, read from the environment (`.env` is loaded first)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Config {
            host,
            port,
            database_url,
            cors_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "mongodb://localhost:27017/recipes")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3002);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_string()]);
    }

    #[test]
    fn test_database_url_is_required() {
        let err = config_from(&[("PORT", "8080")]).unwrap_err();
        assert_eq!(err.to_string(), "DATABASE_URL must be set");
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("DATABASE_URL", "mongodb://db"), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn test_cors_origins_list() {
        let config = config_from(&[
            ("DATABASE_URL", "mongodb://db"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }
}
