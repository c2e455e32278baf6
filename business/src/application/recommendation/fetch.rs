use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendations;
use crate::domain::recommendation::services::RecommendationGeneratorService;
use crate::domain::recommendation::use_cases::fetch::{
    FetchRecommendationsParams, FetchRecommendationsUseCase,
};

pub struct FetchRecommendationsUseCaseImpl {
    pub generator: Arc<dyn RecommendationGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FetchRecommendationsUseCase for FetchRecommendationsUseCaseImpl {
    async fn execute(&self, params: FetchRecommendationsParams) -> Recommendations {
        self.logger.info(&format!(
            "Fetching recommendations for mood: {}, weather: {} {}",
            params.mood,
            params.weather.condition,
            params.weather.display_temperature()
        ));

        let result = match self.generator.generate(&params.mood, &params.weather).await {
            Ok(suggestions) if suggestions.is_empty() => Err(RecommendationError::ResponseShape),
            other => other,
        };

        match result {
            Ok(suggestions) => {
                self.logger
                    .info(&format!("Received {} recommendations", suggestions.len()));
                Recommendations::live(suggestions)
            }
            Err(err) => {
                self.logger.error(&format!(
                    "Recommendation fetch failed, serving fallback: {}",
                    err
                ));
                Recommendations::fallback(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mood::model::Mood;
    use crate::domain::recommendation::fallback::fallback_catalog;
    use crate::domain::recommendation::model::Suggestion;
    use crate::domain::weather::model::WeatherSnapshot;
    use mockall::mock;

    mock! {
        pub RecommendationGenerator {}

        #[async_trait]
        impl RecommendationGeneratorService for RecommendationGenerator {
            async fn generate(
                &self,
                mood: &Mood,
                weather: &WeatherSnapshot,
            ) -> Result<Vec<Suggestion>, RecommendationError>;
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

    fn params() -> FetchRecommendationsParams {
        FetchRecommendationsParams {
            mood: Mood::Good,
            weather: WeatherSnapshot::new("Clear", 20.0),
        }
    }

    fn live_suggestions() -> Vec<Suggestion> {
        vec![
            Suggestion::new("자전거 타기", "강변을 달려보세요.", vec!["야외".to_string()]),
            Suggestion::new("산책", "걸어보세요", vec!["야외".to_string()]),
        ]
    }

    fn use_case(generator: MockRecommendationGenerator) -> FetchRecommendationsUseCaseImpl {
        FetchRecommendationsUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_live_suggestions_in_generator_order() {
        let mut generator = MockRecommendationGenerator::new();
        generator
            .expect_generate()
            .withf(|mood, weather| *mood == Mood::Good && weather.condition == "Clear")
            .times(1)
            .returning(|_, _| Ok(live_suggestions()));

        let result = use_case(generator).execute(params()).await;

        assert!(!result.is_fallback());
        assert_eq!(result.suggestions, live_suggestions());
    }

    #[tokio::test]
    async fn should_return_fallback_when_server_errors() {
        let mut generator = MockRecommendationGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Err(RecommendationError::ServerError(503)));

        let result = use_case(generator).execute(params()).await;

        assert_eq!(result.suggestions, fallback_catalog());
        assert_eq!(result.fallback, Some(RecommendationError::ServerError(503)));
    }

    #[tokio::test]
    async fn should_return_fallback_when_decode_fails() {
        let mut generator = MockRecommendationGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Err(RecommendationError::Decode));

        let result = use_case(generator).execute(params()).await;

        assert_eq!(result.suggestions, fallback_catalog());
        assert!(result.notice().is_some());
    }

    #[tokio::test]
    async fn should_treat_empty_activity_list_as_failure() {
        let mut generator = MockRecommendationGenerator::new();
        generator.expect_generate().returning(|_, _| Ok(vec![]));

        let result = use_case(generator).execute(params()).await;

        assert_eq!(result.suggestions, fallback_catalog());
        assert_eq!(result.fallback, Some(RecommendationError::ResponseShape));
    }

    #[tokio::test]
    async fn should_return_identical_fallbacks_on_repeated_transport_failures() {
        let mut generator = MockRecommendationGenerator::new();
        generator
            .expect_generate()
            .times(2)
            .returning(|_, _| Err(RecommendationError::TransportFailure));
        let use_case = use_case(generator);

        let first = use_case.execute(params()).await;
        let second = use_case.execute(params()).await;

        assert_eq!(first, second);
        assert_eq!(first.suggestions, fallback_catalog());
    }

    #[tokio::test]
    async fn should_log_error_when_falling_back() {
        let mut generator = MockRecommendationGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Err(RecommendationError::TransportFailure));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("recommendation.transport_failure"))
            .times(1)
            .returning(|_| ());

        let use_case = FetchRecommendationsUseCaseImpl {
            generator: Arc::new(generator),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_fallback());
    }
}
