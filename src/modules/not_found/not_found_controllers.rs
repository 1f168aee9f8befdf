use crate::shared::exceptions::exception::Exception;
use actix_web::{HttpRequest, HttpResponse};

/// Fallback for every request no controller claimed.
pub async fn endpoint_not_found(req: HttpRequest) -> HttpResponse {
    log::debug!("{} {}: no route", req.method(), req.path());
    Exception::endpoint_not_found()
}
