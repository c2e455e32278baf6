use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::mood::model::Mood;
use crate::domain::recommendation::model::Suggestion;
use crate::domain::weather::model::WeatherSnapshot;

use super::errors::DailyLogError;

/// Entry handed to the record store before it has an id or timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLogDraft {
    pub mood: Mood,
    pub weather: WeatherSnapshot,
    pub activity_title: Option<String>,
    pub location: Option<String>,
}

impl DailyLogDraft {
    pub fn from_selection(
        mood: Mood,
        weather: WeatherSnapshot,
        activity: Option<&Suggestion>,
        location: Option<String>,
    ) -> Result<Self, DailyLogError> {
        let activity_title = match activity {
            Some(suggestion) if suggestion.title.trim().is_empty() => {
                return Err(DailyLogError::InvalidActivity);
            }
            Some(suggestion) => Some(suggestion.title.trim().to_string()),
            None => None,
        };

        Ok(Self {
            mood,
            weather,
            activity_title,
            location: location.filter(|l| !l.trim().is_empty()),
        })
    }
}

/// Entry as persisted by the record store.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLog {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub mood: Mood,
    pub weather_condition: String,
    pub temperature_celsius: f64,
    pub activity_title: Option<String>,
    pub activity_completed: bool,
    pub location: Option<String>,
}

impl DailyLog {
    /// Constructor for stores: attaches the store-assigned id and timestamp.
    pub fn from_draft(id: Uuid, recorded_at: DateTime<Utc>, draft: DailyLogDraft) -> Self {
        Self {
            id,
            recorded_at,
            mood: draft.mood,
            weather_condition: draft.weather.condition,
            temperature_celsius: draft.weather.temperature_celsius,
            activity_title: draft.activity_title,
            activity_completed: false,
            location: draft.location,
        }
    }

    pub fn toggle_completion(&mut self) {
        self.activity_completed = !self.activity_completed;
    }
}
