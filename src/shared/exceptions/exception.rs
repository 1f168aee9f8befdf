use super::storage_failure::StorageFailure;
use crate::{
    shared::structs::{
        error_struct::{ErrorStruct, ValidationErrorStruct},
        field_problem::FieldProblem,
    },
    utils::error_construct::error_construct,
};
use actix_web::HttpResponse;

pub const ENDPOINT_NOT_FOUND: &str = "Endpoint no encontrado";

/// # Exception
///
/// Only the controllers build error responses, and they all go through here.
///
/// ## Functions:
///
/// bad_request (errors: Vec<FieldProblem>) -> HttpResponse Error 400
///
/// endpoint_not_found () -> HttpResponse Error 404
///
/// internal_server_error (failure: &StorageFailure) -> HttpResponse Error 500
///
pub struct Exception;

impl Exception {
    /// Error 400
    ///
    /// ## Arguments
    ///
    /// * `errors` - Vec<FieldProblem>
    ///
    /// ## Example
    ///
    /// ```rust
    /// use like_me_api::shared::exceptions::exception::Exception;
    /// use like_me_api::shared::structs::field_problem::FieldProblem;
    ///
    /// let response = Exception::bad_request(vec![FieldProblem::required("titulo")]);
    /// assert_eq!(response.status(), 400);
    /// ```
    pub fn bad_request(errors: Vec<FieldProblem>) -> HttpResponse {
        HttpResponse::BadRequest().json(ValidationErrorStruct {
            status: false,
            errors,
        })
    }

    /// Error 404
    ///
    /// The body keeps `status: true`; existing clients read it as-is.
    pub fn endpoint_not_found() -> HttpResponse {
        HttpResponse::NotFound().json(ErrorStruct {
            status: true,
            message: String::from(ENDPOINT_NOT_FOUND),
        })
    }

    /// Error 500
    ///
    /// ## Arguments
    ///
    /// * `failure` - &StorageFailure
    ///
    /// ## Example
    ///
    /// ```rust
    /// use like_me_api::shared::exceptions::exception::Exception;
    /// use like_me_api::shared::exceptions::storage_failure::StorageFailure;
    ///
    /// let response = Exception::internal_server_error(&StorageFailure::new("08006"));
    /// assert_eq!(response.status(), 500);
    /// ```
    pub fn internal_server_error(failure: &StorageFailure) -> HttpResponse {
        HttpResponse::InternalServerError().json(error_construct(failure))
    }
}
