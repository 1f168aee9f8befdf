use anyhow::{anyhow, bail, Result};
use std::{env, fmt::Display, str::FromStr, time::Duration};

/// # Environment
///
/// Process settings, read once at startup (after `dotenv` loaded any `.env` file).
///
/// ## Fields
///
/// * `http_port` - `HTTP_PORT`, default `3000`.
/// * `db_host` - `DB_HOST`, default `localhost`.
/// * `db_port` - `DB_PORT`, default `5432`.
/// * `db_name` - `DB_NAME`, default `likeme`.
/// * `db_user` - `DB_USER`, default `postgres`.
/// * `db_password` - `DB_PASSWORD`, default `postgres`.
/// * `pool_size` - `DB_POOL_SIZE`, default `16`.
/// * `query_timeout` - `DB_QUERY_TIMEOUT_MS`, default `5000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub http_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub pool_size: usize,
    pub query_timeout: Duration,
}

impl Environment {
    pub fn from_env() -> Result<Self> {
        let pool_size: usize = parsed_var("DB_POOL_SIZE", 16)?;
        if pool_size == 0 {
            bail!("DB_POOL_SIZE debe ser mayor que 0");
        }
        let query_timeout_ms: u64 = parsed_var("DB_QUERY_TIMEOUT_MS", 5000)?;
        if query_timeout_ms == 0 {
            bail!("DB_QUERY_TIMEOUT_MS debe ser mayor que 0");
        }

        Ok(Self {
            http_port: parsed_var("HTTP_PORT", 3000)?,
            db_host: env::var("DB_HOST").unwrap_or(String::from("localhost")),
            db_port: parsed_var("DB_PORT", 5432)?,
            db_name: env::var("DB_NAME").unwrap_or(String::from("likeme")),
            db_user: env::var("DB_USER").unwrap_or(String::from("postgres")),
            db_password: env::var("DB_PASSWORD").unwrap_or(String::from("postgres")),
            pool_size,
            query_timeout: Duration::from_millis(query_timeout_ms),
        })
    }
}

fn parsed_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} inválido ({value:?}): {e}")),
        Err(_) => Ok(default),
    }
}
