use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming an alternative TOML config file.
pub const CONFIG_PATH_ENV: &str = "TRIVIA_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";
const ENV_PREFIX: &str = "TRIVIA_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub max_connections: u32,
    /// Questions per page for every paginated endpoint.
    pub page_size: i64,
    pub loglevel: String,
    /// Insert the stock categories on startup when they are missing.
    pub seed_categories: bool,
    /// Allowed CORS origins; `*` allows any.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:trivia.sqlite".to_string(),
            max_connections: 5,
            page_size: 10,
            loglevel: "info".to_string(),
            seed_categories: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    /// Defaults, then the TOML file, then `TRIVIA_*` environment variables.
    pub fn figment() -> Figment {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        let cfg: Config = figment.extract()?;
        if cfg.page_size < 1 {
            return Err(figment::Error::from(format!(
                "page_size must be at least 1, got {}",
                cfg.page_size
            )));
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }

    #[test]
    fn defaults_match_stock_deployment() {
        let cfg = Config::from_figment(base()).expect("defaults should extract");
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.listen_addr, "0.0.0.0:8000");
        assert!(cfg.seed_categories);
        assert_eq!(cfg.cors_origins, vec!["*".to_string()]);
    }

    #[test]
    fn overrides_replace_defaults() {
        let cfg = Config::from_figment(
            base()
                .merge(("page_size", 3))
                .merge(("database_url", "sqlite::memory:")),
        )
        .expect("override should extract");
        assert_eq!(cfg.page_size, 3);
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.max_connections, 5);
    }

    #[test]
    fn rejects_non_positive_page_size() {
        let err = Config::from_figment(base().merge(("page_size", 0)));
        assert!(err.is_err());
    }
}
