use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::mood::model::Mood;
use business::domain::recommendation::use_cases::fetch::{
    FetchRecommendationsParams, FetchRecommendationsUseCase,
};
use business::domain::weather::model::WeatherSnapshot;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::RecommendationsResponse;
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    fetch_use_case: Arc<dyn FetchRecommendationsUseCase>,
}

impl RecommendationApi {
    pub fn new(fetch_use_case: Arc<dyn FetchRecommendationsUseCase>) -> Self {
        Self { fetch_use_case }
    }
}

/// Recommendation API
///
/// Activity suggestions for the current mood and weather.
#[OpenApi]
impl RecommendationApi {
    /// Get activity recommendations
    ///
    /// Asks the AI service for activities matching the mood and weather.
    /// When the AI service fails for any reason, a fixed list of default
    /// activities is returned with `is_fallback` set.
    #[oai(path = "/recommendations", method = "get", tag = "ApiTags::Recommendations")]
    async fn get_recommendations(
        &self,
        /// Mood code (`very_good`, `good`, `neutral`, `bad`, `worst`) or label
        mood: Query<String>,
        /// Weather condition keyword, e.g. `Clear`, `Rain`
        condition: Query<String>,
        /// Temperature in degrees Celsius
        temperature: Query<f64>,
    ) -> GetRecommendationsResponse {
        let mood = match mood.0.parse::<Mood>() {
            Ok(mood) => mood,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return GetRecommendationsResponse::BadRequest(json);
            }
        };

        let recommendations = self
            .fetch_use_case
            .execute(FetchRecommendationsParams {
                mood,
                weather: WeatherSnapshot::new(condition.0, temperature.0),
            })
            .await;

        GetRecommendationsResponse::Ok(Json(recommendations.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecommendationsResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
