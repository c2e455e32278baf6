use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::daily_log::use_cases::delete::{DeleteDailyLogParams, DeleteDailyLogUseCase};
use business::domain::daily_log::use_cases::get_all::GetAllDailyLogsUseCase;
use business::domain::daily_log::use_cases::get_stats::GetMoodStatsUseCase;
use business::domain::daily_log::use_cases::record::{
    RecordDailyLogParams, RecordDailyLogUseCase,
};
use business::domain::daily_log::use_cases::toggle_completion::{
    ToggleDailyLogCompletionParams, ToggleDailyLogCompletionUseCase,
};
use business::domain::mood::model::Mood;
use business::domain::weather::model::WeatherSnapshot;

use crate::api::daily_log::dto::{CreateDailyLogRequest, DailyLogResponse, MoodStatsResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DailyLogApi {
    record_use_case: Arc<dyn RecordDailyLogUseCase>,
    get_all_use_case: Arc<dyn GetAllDailyLogsUseCase>,
    toggle_completion_use_case: Arc<dyn ToggleDailyLogCompletionUseCase>,
    delete_use_case: Arc<dyn DeleteDailyLogUseCase>,
    get_stats_use_case: Arc<dyn GetMoodStatsUseCase>,
}

impl DailyLogApi {
    pub fn new(
        record_use_case: Arc<dyn RecordDailyLogUseCase>,
        get_all_use_case: Arc<dyn GetAllDailyLogsUseCase>,
        toggle_completion_use_case: Arc<dyn ToggleDailyLogCompletionUseCase>,
        delete_use_case: Arc<dyn DeleteDailyLogUseCase>,
        get_stats_use_case: Arc<dyn GetMoodStatsUseCase>,
    ) -> Self {
        Self {
            record_use_case,
            get_all_use_case,
            toggle_completion_use_case,
            delete_use_case,
            get_stats_use_case,
        }
    }
}

fn invalid_id() -> ErrorResponse {
    ErrorResponse {
        name: "ValidationError".to_string(),
        message: "daily_log.invalid_id".to_string(),
    }
}

/// Daily log API
///
/// Mood journal entries and their statistics.
#[OpenApi]
impl DailyLogApi {
    /// List daily logs
    ///
    /// Returns every recorded entry, newest first.
    #[oai(path = "/daily-logs", method = "get", tag = "ApiTags::DailyLogs")]
    async fn get_all(&self) -> GetAllDailyLogsResponse {
        match self.get_all_use_case.execute().await {
            Ok(logs) => GetAllDailyLogsResponse::Ok(Json(
                logs.into_iter().map(|log| log.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllDailyLogsResponse::InternalError(json)
            }
        }
    }

    /// Record a daily log
    ///
    /// Stores the mood, the weather and optionally the activity picked from
    /// the recommendations.
    #[oai(path = "/daily-logs", method = "post", tag = "ApiTags::DailyLogs")]
    async fn create(&self, body: Json<CreateDailyLogRequest>) -> CreateDailyLogResponse {
        let body = body.0;
        let mood = match body.mood.parse::<Mood>() {
            Ok(mood) => mood,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return CreateDailyLogResponse::BadRequest(json);
            }
        };

        let params = RecordDailyLogParams {
            mood,
            weather: WeatherSnapshot::new(body.condition, body.temperature),
            activity: body.activity.map(|a| a.into()),
            location: body.location,
        };

        match self.record_use_case.execute(params).await {
            Ok(log) => CreateDailyLogResponse::Created(Json(log.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateDailyLogResponse::BadRequest(json),
                    _ => CreateDailyLogResponse::InternalError(json),
                }
            }
        }
    }

    /// Mood statistics
    ///
    /// Weekly and monthly activity completion rates and the daily mood trend
    /// of the last seven days.
    #[oai(path = "/daily-logs/stats", method = "get", tag = "ApiTags::DailyLogs")]
    async fn get_stats(&self) -> GetMoodStatsResponse {
        match self.get_stats_use_case.execute().await {
            Ok(stats) => GetMoodStatsResponse::Ok(Json(stats.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetMoodStatsResponse::InternalError(json)
            }
        }
    }

    /// Toggle activity completion
    ///
    /// Flips whether the logged activity was done.
    #[oai(
        path = "/daily-logs/:id/toggle-completion",
        method = "post",
        tag = "ApiTags::DailyLogs"
    )]
    async fn toggle_completion(&self, id: Path<String>) -> ToggleCompletionResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return ToggleCompletionResponse::BadRequest(Json(invalid_id()));
        };

        match self
            .toggle_completion_use_case
            .execute(ToggleDailyLogCompletionParams { id })
            .await
        {
            Ok(log) => ToggleCompletionResponse::Ok(Json(log.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ToggleCompletionResponse::NotFound(json),
                    _ => ToggleCompletionResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a daily log
    #[oai(path = "/daily-logs/:id", method = "delete", tag = "ApiTags::DailyLogs")]
    async fn delete(&self, id: Path<String>) -> DeleteDailyLogResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteDailyLogResponse::BadRequest(Json(invalid_id()));
        };

        match self
            .delete_use_case
            .execute(DeleteDailyLogParams { id })
            .await
        {
            Ok(()) => DeleteDailyLogResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteDailyLogResponse::NotFound(json),
                    _ => DeleteDailyLogResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllDailyLogsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<DailyLogResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateDailyLogResponse {
    #[oai(status = 201)]
    Created(Json<DailyLogResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMoodStatsResponse {
    #[oai(status = 200)]
    Ok(Json<MoodStatsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleCompletionResponse {
    #[oai(status = 200)]
    Ok(Json<DailyLogResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteDailyLogResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
