use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

pub const INVALID_ID: &str = "product.invalid_id";
pub const INTERNAL_ERROR: &str = "internal_error";

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::MissingFields(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ProductError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ProductError::Repository(e) => {
                tracing::error!("Unexpected repository failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message }))
    }
}
