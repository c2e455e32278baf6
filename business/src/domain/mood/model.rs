use serde::{Deserialize, Serialize};

use super::errors::MoodError;

/// Five-level emotional state picked by the user for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    VeryGood,
    Good,
    Neutral,
    Bad,
    Worst,
}

impl Mood {
    /// All moods, best first.
    pub const ALL: [Mood; 5] = [
        Mood::VeryGood,
        Mood::Good,
        Mood::Neutral,
        Mood::Bad,
        Mood::Worst,
    ];

    /// Machine-readable code, also used as the query/serde value.
    pub fn code(&self) -> &'static str {
        match self {
            Mood::VeryGood => "very_good",
            Mood::Good => "good",
            Mood::Neutral => "neutral",
            Mood::Bad => "bad",
            Mood::Worst => "worst",
        }
    }

    /// Display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::VeryGood => "매우 좋음",
            Mood::Good => "좋음",
            Mood::Neutral => "보통",
            Mood::Bad => "나쁨",
            Mood::Worst => "최악",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::VeryGood => "🥰",
            Mood::Good => "😊",
            Mood::Neutral => "😐",
            Mood::Bad => "😞",
            Mood::Worst => "😫",
        }
    }

    /// Pastel theme color as an RGB hex string without the leading `#`.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Mood::VeryGood => "FF9AA2",
            Mood::Good => "FFB7B2",
            Mood::Neutral => "E2F0CB",
            Mood::Bad => "B5EAD7",
            Mood::Worst => "C7CEEA",
        }
    }

    /// Score for statistics, 1 (worst) to 5 (very good).
    pub fn score(&self) -> u8 {
        match self {
            Mood::VeryGood => 5,
            Mood::Good => 4,
            Mood::Neutral => 3,
            Mood::Bad => 2,
            Mood::Worst => 1,
        }
    }

    /// English descriptor embedded in AI prompts.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Mood::VeryGood => "very happy and energetic",
            Mood::Good => "good and content",
            Mood::Neutral => "neutral and calm",
            Mood::Bad => "bad and feeling down",
            Mood::Worst => "terrible and depressed",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Mood {
    type Err = MoodError;

    /// Accepts either the code (`good`) or the display label (`좋음`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.code().eq_ignore_ascii_case(s) || mood.label() == s)
            .ok_or(MoodError::Unknown)
    }
}
