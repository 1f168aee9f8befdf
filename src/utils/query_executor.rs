use crate::shared::exceptions::storage_failure::StorageFailure;
use deadpool_postgres::Pool;
use std::time::Duration;
use tokio_postgres::{types::ToSql, Row};

/// Run one parameterized statement on a pooled connection.
///
/// Checkout, preparation and execution share a single time bound; running past it is reported
/// as `QUERY_TIMEOUT`. Nothing is retried.
///
/// # Parameters
///
/// - `pg_pool`: The shared Postgres pool.
/// - `timeout`: Bound for the whole round trip.
/// - `statement`: SQL with `$n` placeholders.
/// - `params`: Values bound to the placeholders, in order.
///
/// # Returns
///
/// Returns the rows produced by the statement, or the `StorageFailure` that stopped it.
pub async fn query_executor(
    pg_pool: &Pool,
    timeout: Duration,
    statement: &str,
    params: &[&(dyn ToSql + Sync)],
) -> Result<Vec<Row>, StorageFailure> {
    tokio::time::timeout(timeout, async {
        let client = pg_pool.get().await?;
        let stmt = client.prepare_cached(statement).await?;
        let rows = client.query(&stmt, params).await?;
        Ok::<_, StorageFailure>(rows)
    })
    .await?
}
