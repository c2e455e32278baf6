use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::daily_log::model::{DailyLog, DailyLogDraft};
use business::domain::daily_log::repository::DailyLogRepository;
use business::domain::errors::RepositoryError;

/// Process-local record store. Entries live as long as the server does.
#[derive(Default)]
pub struct DailyLogRepositoryInMemory {
    logs: RwLock<Vec<DailyLog>>,
}

impl DailyLogRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DailyLogRepository for DailyLogRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<DailyLog>, RepositoryError> {
        let mut logs = self.logs.read().await.clone();
        logs.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(logs)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<DailyLog, RepositoryError> {
        self.logs
            .read()
            .await
            .iter()
            .find(|log| log.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, draft: &DailyLogDraft) -> Result<DailyLog, RepositoryError> {
        let log = DailyLog::from_draft(Uuid::new_v4(), Utc::now(), draft.clone());
        self.logs.write().await.push(log.clone());
        Ok(log)
    }

    async fn update(&self, log: &DailyLog) -> Result<(), RepositoryError> {
        let mut logs = self.logs.write().await;
        let stored = logs
            .iter_mut()
            .find(|stored| stored.id == log.id)
            .ok_or(RepositoryError::NotFound)?;
        *stored = log.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut logs = self.logs.write().await;
        let before = logs.len();
        logs.retain(|log| log.id != id);
        if logs.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::mood::model::Mood;
    use business::domain::weather::model::WeatherSnapshot;

    fn draft(mood: Mood) -> DailyLogDraft {
        DailyLogDraft::from_selection(mood, WeatherSnapshot::new("Snow", -2.0), None, None)
            .unwrap()
    }

    #[tokio::test]
    async fn should_assign_id_and_timestamp_on_save() {
        let repo = DailyLogRepositoryInMemory::new();
        let before = Utc::now();

        let saved = repo.save(&draft(Mood::Bad)).await.unwrap();

        assert!(saved.recorded_at >= before);
        assert!(!saved.activity_completed);
        assert_eq!(repo.get_by_id(saved.id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn should_list_newest_first() {
        let repo = DailyLogRepositoryInMemory::new();
        let first = repo.save(&draft(Mood::Good)).await.unwrap();
        let second = repo.save(&draft(Mood::Worst)).await.unwrap();

        let logs = repo.get_all().await.unwrap();

        assert_eq!(logs.len(), 2);
        assert!(logs[0].recorded_at >= logs[1].recorded_at);
        assert!(logs.iter().any(|log| log.id == first.id));
        assert!(logs.iter().any(|log| log.id == second.id));
    }

    #[tokio::test]
    async fn should_replace_stored_entry_on_update() {
        let repo = DailyLogRepositoryInMemory::new();
        let mut log = repo.save(&draft(Mood::Neutral)).await.unwrap();

        log.toggle_completion();
        repo.update(&log).await.unwrap();

        assert!(repo.get_by_id(log.id).await.unwrap().activity_completed);
    }

    #[tokio::test]
    async fn should_report_missing_entries_as_not_found() {
        let repo = DailyLogRepositoryInMemory::new();
        let unsaved = DailyLog::from_draft(Uuid::new_v4(), Utc::now(), draft(Mood::Good));

        assert!(matches!(
            repo.get_by_id(unsaved.id).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(matches!(
            repo.update(&unsaved).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(matches!(
            repo.delete(unsaved.id).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn should_remove_entry_on_delete() {
        let repo = DailyLogRepositoryInMemory::new();
        let log = repo.save(&draft(Mood::VeryGood)).await.unwrap();

        repo.delete(log.id).await.unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
