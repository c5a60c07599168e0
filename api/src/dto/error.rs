//! Error response DTO and actix helpers

use actix_web::http::StatusCode;

pub use bb_shared::types::response::ErrorBody;

/// Extension trait for ErrorBody to add actix-web specific methods
pub trait ErrorBodyExt {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse;
}

impl ErrorBodyExt for ErrorBody {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(status).json(self)
    }
}
