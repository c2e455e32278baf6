use super::errors::RecommendationError;
use super::fallback::fallback_catalog;

/// Message shown alongside the fallback catalog.
pub const FALLBACK_NOTICE: &str = "AI 연결이 원활하지 않아 기본 추천을 표시합니다.";

/// One recommended activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Suggestion {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags,
        }
    }

    /// Tags joined as hashtags, e.g. `#실내 #휴식`.
    pub fn tags_string(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of a recommendation fetch.
///
/// `suggestions` is never empty. When `fallback` is set, `suggestions` is the
/// fallback catalog and `fallback` holds the error that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub suggestions: Vec<Suggestion>,
    pub fallback: Option<RecommendationError>,
}

impl Recommendations {
    pub fn live(suggestions: Vec<Suggestion>) -> Self {
        Self {
            suggestions,
            fallback: None,
        }
    }

    pub fn fallback(cause: RecommendationError) -> Self {
        Self {
            suggestions: fallback_catalog(),
            fallback: Some(cause),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// User-facing notice, only present for fallback results.
    pub fn notice(&self) -> Option<&'static str> {
        self.fallback.as_ref().map(|_| FALLBACK_NOTICE)
    }
}
