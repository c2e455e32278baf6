use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::daily_log::model::DailyLog;
use business::domain::daily_log::stats::{CompletionRate, DailyMoodTrend, MoodStats};
use business::domain::recommendation::model::Suggestion;

#[derive(Debug, Clone, Object)]
pub struct ActivityRequest {
    /// Title of the chosen activity (cannot be blank)
    pub title: String,
    #[oai(default)]
    pub description: String,
    #[oai(default)]
    pub tags: Vec<String>,
}

impl From<ActivityRequest> for Suggestion {
    fn from(a: ActivityRequest) -> Self {
        Suggestion::new(a.title, a.description, a.tags)
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateDailyLogRequest {
    /// Mood code (`very_good`, `good`, `neutral`, `bad`, `worst`) or label
    pub mood: String,
    /// Weather condition keyword, e.g. `Clear`, `Rain`
    pub condition: String,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Activity picked from the recommendations, if any
    #[oai(skip_serializing_if_is_none)]
    pub activity: Option<ActivityRequest>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct DailyLogResponse {
    pub id: String,
    pub recorded_at: DateTime<Utc>,
    /// Mood code
    pub mood: String,
    pub mood_label: String,
    pub mood_emoji: String,
    pub weather_condition: String,
    pub temperature: f64,
    #[oai(skip_serializing_if_is_none)]
    pub activity_title: Option<String>,
    pub activity_completed: bool,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
}

impl From<DailyLog> for DailyLogResponse {
    fn from(log: DailyLog) -> Self {
        Self {
            id: log.id.to_string(),
            recorded_at: log.recorded_at,
            mood: log.mood.code().to_string(),
            mood_label: log.mood.label().to_string(),
            mood_emoji: log.mood.emoji().to_string(),
            weather_condition: log.weather_condition,
            temperature: log.temperature_celsius,
            activity_title: log.activity_title,
            activity_completed: log.activity_completed,
            location: log.location,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CompletionRateResponse {
    pub total: u64,
    pub completed: u64,
    /// Completed share between 0 and 1
    pub rate: f64,
}

impl From<CompletionRate> for CompletionRateResponse {
    fn from(c: CompletionRate) -> Self {
        Self {
            total: c.total as u64,
            completed: c.completed as u64,
            rate: c.rate(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MoodTrendPointResponse {
    /// Day in `YYYY-MM-DD` (UTC)
    pub date: String,
    pub average_score: u8,
    /// Most frequent mood code of the day
    pub mood: String,
}

impl From<DailyMoodTrend> for MoodTrendPointResponse {
    fn from(t: DailyMoodTrend) -> Self {
        Self {
            date: t.date.format("%Y-%m-%d").to_string(),
            average_score: t.average_score,
            mood: t.mood.code().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MoodStatsResponse {
    /// Entries since midnight seven days ago
    pub weekly: CompletionRateResponse,
    /// Entries in the current calendar month
    pub monthly: CompletionRateResponse,
    /// Daily mood summary over the weekly window, oldest first
    pub trend: Vec<MoodTrendPointResponse>,
}

impl From<MoodStats> for MoodStatsResponse {
    fn from(s: MoodStats) -> Self {
        Self {
            weekly: s.weekly.into(),
            monthly: s.monthly.into(),
            trend: s.trend.into_iter().map(|t| t.into()).collect(),
        }
    }
}
