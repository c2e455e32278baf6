use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{DailyLog, DailyLogDraft};

/// Port to the external record store. The store owns identifiers,
/// timestamps and the lifecycle of saved entries.
#[async_trait]
pub trait DailyLogRepository: Send + Sync {
    /// All entries, newest first.
    async fn get_all(&self) -> Result<Vec<DailyLog>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<DailyLog, RepositoryError>;
    async fn save(&self, draft: &DailyLogDraft) -> Result<DailyLog, RepositoryError>;
    async fn update(&self, log: &DailyLog) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
