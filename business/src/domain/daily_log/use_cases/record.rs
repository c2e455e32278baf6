use async_trait::async_trait;

use crate::domain::daily_log::errors::DailyLogError;
use crate::domain::daily_log::model::DailyLog;
use crate::domain::mood::model::Mood;
use crate::domain::recommendation::model::Suggestion;
use crate::domain::weather::model::WeatherSnapshot;

pub struct RecordDailyLogParams {
    pub mood: Mood,
    pub weather: WeatherSnapshot,
    /// Chosen activity; `None` records the mood alone.
    pub activity: Option<Suggestion>,
    pub location: Option<String>,
}

#[async_trait]
pub trait RecordDailyLogUseCase: Send + Sync {
    async fn execute(&self, params: RecordDailyLogParams) -> Result<DailyLog, DailyLogError>;
}
