use async_trait::async_trait;

use crate::domain::daily_log::errors::DailyLogError;
use crate::domain::daily_log::model::DailyLog;

#[async_trait]
pub trait GetAllDailyLogsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<DailyLog>, DailyLogError>;
}
