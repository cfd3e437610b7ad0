use poem::error::{MethodNotAllowedError, NotFoundError};
use poem::http::StatusCode;
use poem::web::Json;
use poem::{IntoResponse, Response};
use poem_openapi::error::{ContentTypeError, ParseRequestPayloadError};

use crate::api::error::ErrorResponse;

pub const ROUTE_NOT_FOUND: &str = "route.not_found";
pub const INVALID_BODY: &str = "request.invalid_body";

/// Answers any path the API does not serve.
pub async fn route_not_found(_: NotFoundError) -> Response {
    not_found_response()
}

/// Known path, unknown method: reported the same way as an unknown path.
pub async fn method_not_allowed(_: MethodNotAllowedError) -> Response {
    not_found_response()
}

/// Body that is not valid JSON or does not match the request schema.
pub async fn invalid_payload(err: ParseRequestPayloadError) -> Response {
    tracing::debug!("Rejected request body: {}", err);
    invalid_body_response()
}

/// Body sent without a JSON content type.
pub async fn invalid_content_type(err: ContentTypeError) -> Response {
    tracing::debug!("Rejected request content type: {}", err);
    invalid_body_response()
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(ROUTE_NOT_FOUND)),
    )
        .into_response()
}

fn invalid_body_response() -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(INVALID_BODY))).into_response()
}
