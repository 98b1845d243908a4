//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bricklog_domain::error::{CatalogError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CatalogError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ValidationError::MalformedBody(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            // Set-number collisions are reported as bad input, not 409.
            CatalogError::Validation(_) | CatalogError::Conflict(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            CatalogError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bricklog_domain::error::{ConflictError, NotFoundError};

    fn status_of(err: CatalogError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn should_map_validation_to_bad_request() {
        let status = status_of(ValidationError::MissingField("name").into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_conflict_to_bad_request() {
        let status = status_of(
            ConflictError {
                set_number: "75192".to_string(),
            }
            .into(),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let status = status_of(
            NotFoundError::lego_set(3).into(),
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_storage_details_behind_500() {
        let status = status_of(CatalogError::Storage(Box::new(std::io::Error::other(
            "lock poisoned",
        ))));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
