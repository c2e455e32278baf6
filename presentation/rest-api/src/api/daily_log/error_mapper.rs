use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::daily_log::errors::DailyLogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DailyLogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            DailyLogError::InvalidActivity => (StatusCode::BAD_REQUEST, "ValidationError"),
            DailyLogError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            DailyLogError::StoreUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
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
