use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::daily_log::errors::DailyLogError;
use crate::domain::daily_log::model::DailyLog;

pub struct ToggleDailyLogCompletionParams {
    pub id: Uuid,
}

#[async_trait]
pub trait ToggleDailyLogCompletionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ToggleDailyLogCompletionParams,
    ) -> Result<DailyLog, DailyLogError>;
}
