use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::daily_log::errors::DailyLogError;
use crate::domain::daily_log::model::DailyLog;
use crate::domain::daily_log::repository::DailyLogRepository;
use crate::domain::daily_log::use_cases::toggle_completion::{
    ToggleDailyLogCompletionParams, ToggleDailyLogCompletionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ToggleDailyLogCompletionUseCaseImpl {
    pub repository: Arc<dyn DailyLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleDailyLogCompletionUseCase for ToggleDailyLogCompletionUseCaseImpl {
    async fn execute(
        &self,
        params: ToggleDailyLogCompletionParams,
    ) -> Result<DailyLog, DailyLogError> {
        self.logger
            .info(&format!("Toggling activity completion: {}", params.id));

        let mut log = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => DailyLogError::NotFound,
                other => DailyLogError::StoreUnavailable(other),
            })?;

        log.toggle_completion();
        self.repository.update(&log).await?;

        self.logger.info(&format!(
            "Activity completion for {} is now {}",
            log.id, log.activity_completed
        ));
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::daily_log::model::DailyLogDraft;
    use crate::domain::mood::model::Mood;
    use crate::domain::weather::model::WeatherSnapshot;
    use chrono::Utc;
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

    fn stored_log(id: Uuid, completed: bool) -> DailyLog {
        let draft = DailyLogDraft::from_selection(
            Mood::Good,
            WeatherSnapshot::new("Clear", 22.0),
            None,
            None,
        )
        .unwrap();
        let mut log = DailyLog::from_draft(id, Utc::now(), draft);
        log.activity_completed = completed;
        log
    }

    #[tokio::test]
    async fn should_mark_incomplete_log_completed() {
        let id = Uuid::new_v4();
        let mut repo = MockDailyLogRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored_log(id, false)));
        repo.expect_update()
            .withf(|log| log.activity_completed)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ToggleDailyLogCompletionUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let log = use_case
            .execute(ToggleDailyLogCompletionParams { id })
            .await
            .unwrap();

        assert_eq!(log.id, id);
        assert!(log.activity_completed);
    }

    #[tokio::test]
    async fn should_mark_completed_log_incomplete() {
        let id = Uuid::new_v4();
        let mut repo = MockDailyLogRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored_log(id, true)));
        repo.expect_update().returning(|_| Ok(()));

        let use_case = ToggleDailyLogCompletionUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let log = use_case
            .execute(ToggleDailyLogCompletionParams { id })
            .await
            .unwrap();

        assert!(!log.activity_completed);
    }

    #[tokio::test]
    async fn should_return_not_found_when_log_does_not_exist() {
        let mut repo = MockDailyLogRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = ToggleDailyLogCompletionUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ToggleDailyLogCompletionParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(DailyLogError::NotFound)));
    }
}
