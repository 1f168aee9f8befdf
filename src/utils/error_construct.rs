use crate::shared::{
    exceptions::storage_failure::StorageFailure, structs::error_struct::ErrorStruct,
};

pub const STORAGE_FAILURE_PREFIX: &str = "Ha ocurrido un error, codigo: ";

/// Construct the default storage error body.
///
/// # Parameters
///
/// - `failure`: The storage failure whose opaque code is exposed to the client.
///
/// # Returns
///
/// Returns an `ErrorStruct` with `status: false` and the prefixed failure code.
///
/// # Example
///
/// ```rust
/// use like_me_api::shared::exceptions::storage_failure::StorageFailure;
/// use like_me_api::utils::error_construct::error_construct;
///
/// let error = error_construct(&StorageFailure::new("23502"));
/// assert_eq!(error.message, "Ha ocurrido un error, codigo: 23502");
/// ```
pub fn error_construct(failure: &StorageFailure) -> ErrorStruct {
    ErrorStruct {
        status: false,
        message: format!("{STORAGE_FAILURE_PREFIX}{}", failure.code()),
    }
}
