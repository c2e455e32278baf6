use async_trait::async_trait;

use crate::domain::mood::model::Mood;
use crate::domain::weather::model::WeatherSnapshot;

use super::errors::RecommendationError;
use super::model::Suggestion;

/// Service port for asking a text-generation backend for activity suggestions.
///
/// Implementations make exactly one attempt per call and report every
/// failure as an error; falling back is the caller's decision.
#[async_trait]
pub trait RecommendationGeneratorService: Send + Sync {
    async fn generate(
        &self,
        mood: &Mood,
        weather: &WeatherSnapshot,
    ) -> Result<Vec<Suggestion>, RecommendationError>;
}
