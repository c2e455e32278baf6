use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::daily_log::errors::DailyLogError;
use crate::domain::daily_log::model::{DailyLog, DailyLogDraft};
use crate::domain::daily_log::repository::DailyLogRepository;
use crate::domain::daily_log::use_cases::record::{RecordDailyLogParams, RecordDailyLogUseCase};
use crate::domain::logger::Logger;

pub struct RecordDailyLogUseCaseImpl {
    pub repository: Arc<dyn DailyLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecordDailyLogUseCase for RecordDailyLogUseCaseImpl {
    async fn execute(&self, params: RecordDailyLogParams) -> Result<DailyLog, DailyLogError> {
        let draft = DailyLogDraft::from_selection(
            params.mood,
            params.weather,
            params.activity.as_ref(),
            params.location,
        )?;

        self.logger.info(&format!(
            "Recording daily log: mood {}, activity {}",
            draft.mood,
            draft.activity_title.as_deref().unwrap_or("-")
        ));

        let log = self.repository.save(&draft).await.inspect_err(|err| {
            self.logger
                .error(&format!("Failed to record daily log: {}", err));
        })?;

        Ok(log)
    }
}
