use poem_openapi::Object;

use business::domain::recommendation::model::{Recommendations, Suggestion};

#[derive(Debug, Clone, Object)]
pub struct SuggestionResponse {
    /// Short activity title
    pub title: String,
    /// One or two sentences on how to do it
    pub description: String,
    pub tags: Vec<String>,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(s: Suggestion) -> Self {
        Self {
            title: s.title,
            description: s.description,
            tags: s.tags,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecommendationsResponse {
    /// Suggested activities, never empty
    pub suggestions: Vec<SuggestionResponse>,
    /// True when the AI service was unavailable and default suggestions are served
    pub is_fallback: bool,
    /// Message to show next to default suggestions
    #[oai(skip_serializing_if_is_none)]
    pub notice: Option<String>,
}

impl From<Recommendations> for RecommendationsResponse {
    fn from(r: Recommendations) -> Self {
        let is_fallback = r.is_fallback();
        let notice = r.notice().map(str::to_string);

        Self {
            suggestions: r.suggestions.into_iter().map(|s| s.into()).collect(),
            is_fallback,
            notice,
        }
    }
}
