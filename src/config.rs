// src/config.rs
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set in .env file")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Session cookie settings shared by the login handler and the admin
/// extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookieConfig {
    pub cookie_name: String,
    pub ttl_seconds: u64,
    pub secure: bool,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            cookie_name: "portfolio_session".to_string(),
            ttl_seconds: 86_400,
            secure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub redis_url: String,
    pub host: String,
    pub port: u16,
    pub session: SessionCookieConfig,
    pub admin_username: String,
    pub admin_password: String,
    pub seed_default_content: bool,
}

impl AppConfig {
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let port = parse(&lookup, "PORT", 8080u16)?;
        let ttl_seconds = parse(&lookup, "SESSION_TTL_SECONDS", 86_400u64)?;
        if ttl_seconds == 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_SECONDS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            host: or_default("HOST", "127.0.0.1"),
            port,
            session: SessionCookieConfig {
                ttl_seconds,
                secure: parse(&lookup, "SESSION_COOKIE_SECURE", false)?,
                ..SessionCookieConfig::default()
            },
            admin_username: or_default("ADMIN_USERNAME", "admin"),
            admin_password: or_default("ADMIN_PASSWORD", "admin"),
            seed_default_content: parse(&lookup, "SEED_DEFAULT_CONTENT", true)?,
        })
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
