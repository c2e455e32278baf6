use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::daily_log::errors::DailyLogError;
use crate::domain::daily_log::model::DailyLog;
use crate::domain::daily_log::repository::DailyLogRepository;
use crate::domain::daily_log::use_cases::get_all::GetAllDailyLogsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllDailyLogsUseCaseImpl {
    pub repository: Arc<dyn DailyLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllDailyLogsUseCase for GetAllDailyLogsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<DailyLog>, DailyLogError> {
        let logs = self.repository.get_all().await.inspect_err(|err| {
            self.logger
                .error(&format!("Failed to load daily logs: {}", err));
        })?;

        self.logger
            .debug(&format!("Loaded {} daily logs", logs.len()));
        Ok(logs)
    }
}
