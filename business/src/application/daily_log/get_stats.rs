use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::daily_log::errors::DailyLogError;
use crate::domain::daily_log::repository::DailyLogRepository;
use crate::domain::daily_log::stats::MoodStats;
use crate::domain::daily_log::use_cases::get_stats::GetMoodStatsUseCase;
use crate::domain::logger::Logger;

pub struct GetMoodStatsUseCaseImpl {
    pub repository: Arc<dyn DailyLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMoodStatsUseCase for GetMoodStatsUseCaseImpl {
    async fn execute(&self) -> Result<MoodStats, DailyLogError> {
        let logs = self.repository.get_all().await.inspect_err(|err| {
            self.logger
                .error(&format!("Failed to load daily logs for stats: {}", err));
        })?;

        let stats = MoodStats::compute(&logs, Utc::now());
        self.logger.debug(&format!(
            "Stats over {} logs: weekly {}/{}, monthly {}/{}",
            logs.len(),
            stats.weekly.completed,
            stats.weekly.total,
            stats.monthly.completed,
            stats.monthly.total
        ));
        Ok(stats)
    }
}
