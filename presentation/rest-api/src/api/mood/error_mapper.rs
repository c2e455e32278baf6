use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::mood::errors::MoodError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MoodError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            MoodError::Unknown => (StatusCode::BAD_REQUEST, "ValidationError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
