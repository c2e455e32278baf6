use serde::{Deserialize, Serialize};

/// Point-in-time weather reading handed over by the weather provider.
///
/// `condition` is the provider's main condition keyword (`Clear`, `Rain`,
/// `Clouds`, ...). Nothing here resolves locations or refreshes readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub condition: String,
    pub temperature_celsius: f64,
}

impl WeatherSnapshot {
    pub fn new(condition: impl Into<String>, temperature_celsius: f64) -> Self {
        Self {
            condition: condition.into(),
            temperature_celsius,
        }
    }

    /// Temperature truncated to whole degrees, e.g. `24°C`.
    pub fn display_temperature(&self) -> String {
        format!("{}°C", self.temperature_celsius.trunc() as i64)
    }

    /// Korean label for the condition keyword.
    pub fn localized_condition(&self) -> &'static str {
        match self.condition.to_lowercase().as_str() {
            "clear" | "sunny" => "맑음",
            "rain" | "rainy" => "비",
            "drizzle" => "이슬비",
            "clouds" | "cloudy" => "흐림",
            "snow" | "snowy" => "눈",
            "thunderstorm" => "천둥번개",
            "mist" | "fog" => "안개",
            "haze" => "실안개",
            _ => "알 수 없음",
        }
    }

    /// Whether outdoor activities should be de-prioritised.
    pub fn is_unfavourable(&self) -> bool {
        matches!(
            self.condition.to_lowercase().as_str(),
            "rain"
                | "rainy"
                | "drizzle"
                | "snow"
                | "snowy"
                | "thunderstorm"
                | "mist"
                | "fog"
                | "haze"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_truncate_temperature_for_display() {
        assert_eq!(WeatherSnapshot::new("Clear", 24.7).display_temperature(), "24°C");
        assert_eq!(WeatherSnapshot::new("Snow", -3.2).display_temperature(), "-3°C");
    }

    #[test]
    fn should_localize_known_conditions_case_insensitively() {
        assert_eq!(WeatherSnapshot::new("Clear", 20.0).localized_condition(), "맑음");
        assert_eq!(WeatherSnapshot::new("CLOUDS", 20.0).localized_condition(), "흐림");
        assert_eq!(WeatherSnapshot::new("drizzle", 20.0).localized_condition(), "이슬비");
    }

    #[test]
    fn should_fall_back_to_unknown_label() {
        assert_eq!(
            WeatherSnapshot::new("Tornado", 20.0).localized_condition(),
            "알 수 없음"
        );
    }

    #[test]
    fn should_flag_rain_and_snow_as_unfavourable() {
        assert!(WeatherSnapshot::new("Rain", 12.0).is_unfavourable());
        assert!(WeatherSnapshot::new("Snow", -1.0).is_unfavourable());
        assert!(!WeatherSnapshot::new("Clear", 22.0).is_unfavourable());
    }
}
