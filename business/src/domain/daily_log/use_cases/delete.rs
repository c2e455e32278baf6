use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::daily_log::errors::DailyLogError;

pub struct DeleteDailyLogParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteDailyLogUseCase: Send + Sync {
    async fn execute(&self, params: DeleteDailyLogParams) -> Result<(), DailyLogError>;
}
