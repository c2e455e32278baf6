use async_trait::async_trait;

use crate::domain::mood::model::Mood;
use crate::domain::recommendation::model::Recommendations;
use crate::domain::weather::model::WeatherSnapshot;

pub struct FetchRecommendationsParams {
    pub mood: Mood,
    pub weather: WeatherSnapshot,
}

/// Always yields suggestions: live ones, or the fallback catalog.
#[async_trait]
pub trait FetchRecommendationsUseCase: Send + Sync {
    async fn execute(&self, params: FetchRecommendationsParams) -> Recommendations;
}
