//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use scriptdeck_domain::error::ScriptDeckError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ScriptDeckError`] to an HTTP response with appropriate status code.
pub struct ApiError(ScriptDeckError);

impl From<ScriptDeckError> for ApiError {
    fn from(err: ScriptDeckError) -> Self {
        Self(err)
    }
}

/// Status code and client-visible message for a domain error.
///
/// Fetch failures are logged here and masked: the upstream reason stays in
/// the logs, the client sees a generic message.
pub(crate) fn status_and_message(err: &ScriptDeckError) -> (StatusCode, String) {
    match err {
        ScriptDeckError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        ScriptDeckError::IndexOutOfRange(err) => (StatusCode::NOT_FOUND, err.to_string()),
        ScriptDeckError::Fetch(err) => {
            tracing::error!(error = %err, "script fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                "failed to fetch the script catalog".to_string(),
            )
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptdeck_domain::error::{FetchError, IndexOutOfRangeError, ValidationError};

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let (status, message) = status_and_message(&ValidationError::EmptyName.into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "script name must not be empty");
    }

    #[test]
    fn should_map_out_of_range_to_not_found() {
        let (status, message) =
            status_and_message(&IndexOutOfRangeError { index: 7, len: 3 }.into());
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            message,
            "index 7 is out of range for a catalog of 3 scripts"
        );
    }

    #[test]
    fn should_mask_fetch_error_details() {
        let (status, message) =
            status_and_message(&FetchError::new("upstream timed out").into());
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(message, "failed to fetch the script catalog");
    }
}
