use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio::time::error::Elapsed;
use tokio_postgres::Error as TokioPostgresError;

/// # Storage Failure
///
/// Every failure coming from the query-execution path (pool checkout, statement preparation,
/// execution, row decoding or the query time bound) is normalized into this type.
///
/// ## Fields
///
/// * `code` - Opaque identifier of the failure. It is the SQLSTATE when Postgres produced one
///   (`22P02`, `23502`, ...), otherwise a fixed tag naming where the client gave up.
///
/// ## Example
///
/// ```rust
/// use like_me_api::shared::exceptions::storage_failure::StorageFailure;
///
/// let failure = StorageFailure::new("22P02");
/// assert_eq!(failure.code(), "22P02");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage failure, code: {code}")]
pub struct StorageFailure {
    code: String,
}

impl StorageFailure {
    pub const POOL_TIMEOUT: &'static str = "POOL_TIMEOUT";
    pub const POOL_CLOSED: &'static str = "POOL_CLOSED";
    pub const POOL_HOOK: &'static str = "POOL_HOOK";
    pub const POOL_NO_RUNTIME: &'static str = "POOL_NO_RUNTIME";
    pub const CONNECTION_CLOSED: &'static str = "CONNECTION_CLOSED";
    pub const CLIENT_ERROR: &'static str = "CLIENT_ERROR";
    pub const QUERY_TIMEOUT: &'static str = "QUERY_TIMEOUT";

    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl From<TokioPostgresError> for StorageFailure {
    fn from(error: TokioPostgresError) -> Self {
        match error.code() {
            Some(sql_state) => Self::new(sql_state.code()),
            None if error.is_closed() => Self::new(Self::CONNECTION_CLOSED),
            None => Self::new(Self::CLIENT_ERROR),
        }
    }
}

impl From<PoolError> for StorageFailure {
    fn from(error: PoolError) -> Self {
        match error {
            PoolError::Timeout(_) => Self::new(Self::POOL_TIMEOUT),
            PoolError::Closed => Self::new(Self::POOL_CLOSED),
            PoolError::Backend(e) => Self::from(e),
            PoolError::PostCreateHook(_) => Self::new(Self::POOL_HOOK),
            PoolError::NoRuntimeSpecified => Self::new(Self::POOL_NO_RUNTIME),
        }
    }
}

impl From<Elapsed> for StorageFailure {
    fn from(_: Elapsed) -> Self {
        Self::new(Self::QUERY_TIMEOUT)
    }
}
