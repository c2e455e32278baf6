use poem_openapi::Object;

use business::domain::mood::model::Mood;

#[derive(Debug, Clone, Object)]
pub struct MoodResponse {
    /// Code accepted by the `mood` query parameter
    pub code: String,
    /// Display label
    pub label: String,
    pub emoji: String,
    /// Theme color as RGB hex, without `#`
    pub color: String,
    /// Score from 1 (worst) to 5 (very good)
    pub score: u8,
}

impl From<Mood> for MoodResponse {
    fn from(mood: Mood) -> Self {
        Self {
            code: mood.code().to_string(),
            label: mood.label().to_string(),
            emoji: mood.emoji().to_string(),
            color: mood.color_hex().to_string(),
            score: mood.score(),
        }
    }
}
