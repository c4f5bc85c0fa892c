use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            WishlistError::UserNotFound(_)
            | WishlistError::ProductNotFound(_)
            | WishlistError::EntryNotFound { .. }
            | WishlistError::WishlistNotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            WishlistError::ProductOutOfStock(_) => (StatusCode::BAD_REQUEST, "OutOfStock"),
            WishlistError::InvalidPageRequest => (StatusCode::BAD_REQUEST, "ValidationError"),
            WishlistError::DuplicateEntry { .. } => (StatusCode::CONFLICT, "Conflict"),
            WishlistError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                code: self.code().to_string(),
                message: self.to_string(),
            }),
        )
    }
}
