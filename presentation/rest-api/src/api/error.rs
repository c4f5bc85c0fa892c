use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error class, e.g. `NotFound` or `Conflict`
    pub name: String,
    /// Code-style identifier for i18n
    pub code: String,
    /// Human-readable description
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
