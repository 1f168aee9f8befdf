use deadpool_postgres::Pool;
use like_me_api::{config::environment::Environment, infra::postgres::Postgres};
use std::time::Duration;

/// Models for Postgres
///
/// It contains the Postgres Pool Connection models.
///
/// # Functions
///
/// - `postgres_success()` - Pool built from the `DB_*` variables.
/// - `postgres_unreachable()` - Pool pointing at a port nothing listens on.
/// - `postgres_silent(port, query_timeout)` - Pool pointing at a local listener that never answers.
pub struct PostgresModels {}

impl PostgresModels {
    /// Postgres Success model
    ///
    /// In tests, these model is used to guarantee that Postgres is available.
    pub fn postgres_success() -> Pool {
        dotenv::dotenv().ok();
        let environment = Environment::from_env().unwrap();
        Postgres::pool(&environment).unwrap()
    }

    /// Postgres Unreachable model
    ///
    /// In tests, these model is used to throw a postgres connection error without any server.
    pub fn postgres_unreachable() -> Pool {
        let environment = Environment {
            http_port: 3000,
            db_host: String::from("127.0.0.1"),
            db_port: 1,
            db_name: String::from("likeme"),
            db_user: String::from("postgres"),
            db_password: String::from("postgres"),
            pool_size: 2,
            query_timeout: Self::query_timeout(),
        };
        Postgres::pool(&environment).unwrap()
    }

    /// Postgres Silent model
    ///
    /// In tests, these model is used to make every checkout hang until the time bound runs out.
    pub fn postgres_silent(port: u16, query_timeout: Duration) -> Pool {
        let environment = Environment {
            http_port: 3000,
            db_host: String::from("127.0.0.1"),
            db_port: port,
            db_name: String::from("likeme"),
            db_user: String::from("postgres"),
            db_password: String::from("postgres"),
            pool_size: 2,
            query_timeout,
        };
        Postgres::pool(&environment).unwrap()
    }

    pub fn query_timeout() -> Duration {
        Duration::from_secs(2)
    }
}
