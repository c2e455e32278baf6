use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::recommendation_generator::RecommendationGeneratorGemini;
use memory::daily_log::repository::DailyLogRepositoryInMemory;

use business::application::daily_log::delete::DeleteDailyLogUseCaseImpl;
use business::application::daily_log::get_all::GetAllDailyLogsUseCaseImpl;
use business::application::daily_log::get_stats::GetMoodStatsUseCaseImpl;
use business::application::daily_log::record::RecordDailyLogUseCaseImpl;
use business::application::daily_log::toggle_completion::ToggleDailyLogCompletionUseCaseImpl;
use business::application::recommendation::fetch::FetchRecommendationsUseCaseImpl;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub mood_api: crate::api::mood::routes::MoodApi,
    pub recommendation_api: crate::api::recommendation::routes::RecommendationApi,
    pub daily_log_api: crate::api::daily_log::routes::DailyLogApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: GeminiConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();
        let mood_api = crate::api::mood::routes::MoodApi::new();

        // Infrastructure adapters
        let gemini_client = GeminiClient::new(
            gemini_config.api_key,
            gemini_config.model,
            gemini_config.base_url,
            gemini_config.timeout,
        )
        .context("failed to build Gemini HTTP client")?;
        let recommendation_generator = Arc::new(RecommendationGeneratorGemini::new(gemini_client));
        let daily_log_repository = Arc::new(DailyLogRepositoryInMemory::new());

        // Recommendation use cases
        let fetch_recommendations_use_case = Arc::new(FetchRecommendationsUseCaseImpl {
            generator: recommendation_generator,
            logger: logger.clone(),
        });

        // Daily log use cases
        let record_daily_log_use_case = Arc::new(RecordDailyLogUseCaseImpl {
            repository: daily_log_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_daily_logs_use_case = Arc::new(GetAllDailyLogsUseCaseImpl {
            repository: daily_log_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_completion_use_case = Arc::new(ToggleDailyLogCompletionUseCaseImpl {
            repository: daily_log_repository.clone(),
            logger: logger.clone(),
        });
        let delete_daily_log_use_case = Arc::new(DeleteDailyLogUseCaseImpl {
            repository: daily_log_repository.clone(),
            logger: logger.clone(),
        });
        let get_mood_stats_use_case = Arc::new(GetMoodStatsUseCaseImpl {
            repository: daily_log_repository,
            logger,
        });

        let recommendation_api = crate::api::recommendation::routes::RecommendationApi::new(
            fetch_recommendations_use_case,
        );
        let daily_log_api = crate::api::daily_log::routes::DailyLogApi::new(
            record_daily_log_use_case,
            get_all_daily_logs_use_case,
            toggle_completion_use_case,
            delete_daily_log_use_case,
            get_mood_stats_use_case,
        );

        Ok(Self {
            health_api,
            mood_api,
            recommendation_api,
            daily_log_api,
        })
    }
}
