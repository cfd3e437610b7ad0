use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Error body shared by every endpoint: `{"error": "<message>"}`
#[derive(Object, Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
