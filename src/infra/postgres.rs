use crate::config::environment::Environment;
use anyhow::{Context, Result};
use deadpool_postgres::{Config, Pool, Runtime, Timeouts};
use tokio_postgres::NoTls;

pub struct Postgres;

impl Postgres {
    /// Build the shared pool. Connections are opened lazily, so an unreachable server only
    /// shows up as a `StorageFailure` on the first query.
    pub fn pool(environment: &Environment) -> Result<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(environment.db_host.clone());
        cfg.port = Some(environment.db_port);
        cfg.dbname = Some(environment.db_name.clone());
        cfg.user = Some(environment.db_user.clone());
        cfg.password = Some(environment.db_password.clone());

        let mut pool_cfg = cfg.get_pool_config();
        pool_cfg.max_size = environment.pool_size;
        pool_cfg.timeouts = Timeouts {
            wait: Some(environment.query_timeout),
            create: Some(environment.query_timeout),
            recycle: Some(environment.query_timeout),
        };
        cfg.pool = Some(pool_cfg);

        cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            .context("no se pudo crear el pool de Postgres")
    }
}
