use poem_openapi::{OpenApi, payload::Json};

use business::domain::mood::model::Mood;

use crate::api::mood::dto::MoodResponse;
use crate::api::tags::ApiTags;

pub struct MoodApi;

impl MoodApi {
    pub fn new() -> Self {
        Self
    }
}

/// Mood API
#[OpenApi]
impl MoodApi {
    /// List selectable moods
    ///
    /// Returns the five mood levels, best first.
    #[oai(path = "/moods", method = "get", tag = "ApiTags::Moods")]
    async fn list_moods(&self) -> Json<Vec<MoodResponse>> {
        Json(Mood::ALL.into_iter().map(MoodResponse::from).collect())
    }
}
