use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::daily_log::errors::DailyLogError;
use crate::domain::daily_log::repository::DailyLogRepository;
use crate::domain::daily_log::use_cases::delete::{DeleteDailyLogParams, DeleteDailyLogUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteDailyLogUseCaseImpl {
    pub repository: Arc<dyn DailyLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteDailyLogUseCase for DeleteDailyLogUseCaseImpl {
    async fn execute(&self, params: DeleteDailyLogParams) -> Result<(), DailyLogError> {
        self.logger
            .info(&format!("Deleting daily log: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => DailyLogError::NotFound,
                other => DailyLogError::StoreUnavailable(other),
            })?;

        self.logger
            .info(&format!("Daily log deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::daily_log::model::{DailyLog, DailyLogDraft};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub DailyLogRepo {}

        #[async_trait]
        impl DailyLogRepository for DailyLogRepo {
            async fn get_all(&self) -> Result<Vec<DailyLog>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<DailyLog, RepositoryError>;
            async fn save(&self, draft: &DailyLogDraft) -> Result<DailyLog, RepositoryError>;
            async fn update(&self, log: &DailyLog) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_existing_log() {
        let id = Uuid::new_v4();
        let mut repo = MockDailyLogRepo::new();
        repo.expect_delete()
            .withf(move |deleted| *deleted == id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteDailyLogUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteDailyLogParams { id }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_log_does_not_exist() {
        let mut repo = MockDailyLogRepo::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteDailyLogUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteDailyLogParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(DailyLogError::NotFound)));
    }
}
