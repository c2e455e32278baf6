#[derive(Debug, thiserror::Error)]
pub enum DailyLogError {
    #[error("daily_log.invalid_activity")]
    InvalidActivity,
    #[error("daily_log.not_found")]
    NotFound,
    #[error("daily_log.store_unavailable")]
    StoreUnavailable(#[from] crate::domain::errors::RepositoryError),
}
