use async_trait::async_trait;

use crate::domain::daily_log::errors::DailyLogError;
use crate::domain::daily_log::stats::MoodStats;

#[async_trait]
pub trait GetMoodStatsUseCase: Send + Sync {
    /// Statistics as of the current time.
    async fn execute(&self) -> Result<MoodStats, DailyLogError>;
}
