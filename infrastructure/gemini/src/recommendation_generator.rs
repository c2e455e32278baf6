use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use business::domain::mood::model::Mood;
use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::model::Suggestion;
use business::domain::recommendation::services::RecommendationGeneratorService;
use business::domain::weather::model::WeatherSnapshot;

use crate::client::{API_KEY_HEADER, GeminiClient};

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ActivitiesPayload {
    activities: Vec<ActivityDto>,
}

#[derive(Debug, Deserialize)]
struct ActivityDto {
    title: String,
    description: String,
    tags: Vec<String>,
}

impl TryFrom<ActivityDto> for Suggestion {
    type Error = RecommendationError;

    fn try_from(dto: ActivityDto) -> Result<Self, Self::Error> {
        if dto.title.trim().is_empty() {
            return Err(RecommendationError::Decode);
        }
        Ok(Suggestion::new(dto.title, dto.description, dto.tags))
    }
}

pub struct RecommendationGeneratorGemini {
    client: GeminiClient,
}

impl RecommendationGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn activity_guidance(mood: &Mood) -> &'static str {
        match mood {
            Mood::VeryGood | Mood::Good => {
                "The user feels good: suggest energetic, dynamic activities such as sports, exercise, walks or trying something new."
            }
            Mood::Neutral => {
                "The user feels neutral: suggest light hobbies, tidying up or other small productive activities."
            }
            Mood::Bad | Mood::Worst => {
                "The user feels down: suggest calm, comforting activities such as resting, meditation, warm tea or a healing movie."
            }
        }
    }

    fn build_prompt(mood: &Mood, weather: &WeatherSnapshot) -> String {
        let weather_rule = if weather.is_unfavourable() {
            "- The weather is poor: prioritise indoor activities"
        } else {
            "- Outdoor activities are welcome if they suit the mood"
        };

        format!(
            r#"You are an activity recommender for a Korean mood journaling app.

CURRENT STATE:
- Weather: {} ({}), {}
- Mood: {} ({})

Suggest the 3 activities that best fit this combination of weather and mood.

Requirements:
- {}
{}
- Title: concise, in Korean, at most 15 characters
- Description: 1-2 sentences in Korean including a concrete way to do it
- Tags: 2-3 short Korean keywords

Return ONLY a JSON object with this EXACT structure:
{{
  "activities": [
    {{
      "title": "Activity title",
      "description": "Activity description",
      "tags": ["tag1", "tag2", "tag3"]
    }}
  ]
}}

Output the JSON only, with no additional text."#,
            weather.condition,
            weather.localized_condition(),
            weather.display_temperature(),
            mood.label(),
            mood.descriptor(),
            Self::activity_guidance(mood),
            weather_rule,
        )
    }

    fn request_body(prompt: &str) -> serde_json::Value {
        json!({
            "contents": [
                {"parts": [{"text": prompt}]}
            ]
        })
    }

    /// Removes markdown code fences and surrounding whitespace.
    fn strip_code_fences(text: &str) -> String {
        text.replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string()
    }

    fn parse_activities(text: &str) -> Result<Vec<Suggestion>, RecommendationError> {
        let json_text = Self::strip_code_fences(text);

        let payload: ActivitiesPayload = serde_json::from_str(&json_text).map_err(|err| {
            debug!("Gemini activities decode failed: {}", err);
            RecommendationError::Decode
        })?;

        payload
            .activities
            .into_iter()
            .map(Suggestion::try_from)
            .collect()
    }

    /// Turns a raw HTTP status and body into suggestions.
    fn parse_response(status: u16, body: &str) -> Result<Vec<Suggestion>, RecommendationError> {
        if !(200..300).contains(&status) {
            return Err(RecommendationError::ServerError(status));
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(body).map_err(|_| RecommendationError::ResponseShape)?;

        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(RecommendationError::ResponseShape)?;

        Self::parse_activities(&text)
    }

    fn build_request(
        &self,
        mood: &Mood,
        weather: &WeatherSnapshot,
    ) -> Result<reqwest::Request, RecommendationError> {
        let url = self
            .client
            .generate_content_url()
            .map_err(|_| RecommendationError::InputInvalid)?;

        let prompt = Self::build_prompt(mood, weather);

        self.client
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, &self.client.api_key)
            .json(&Self::request_body(&prompt))
            .build()
            .map_err(|_| RecommendationError::InputInvalid)
    }

    /// Error text safe to log: the request URL is stripped.
    fn describe_transport_error(err: reqwest::Error) -> String {
        err.without_url().to_string()
    }
}

#[async_trait]
impl RecommendationGeneratorService for RecommendationGeneratorGemini {
    async fn generate(
        &self,
        mood: &Mood,
        weather: &WeatherSnapshot,
    ) -> Result<Vec<Suggestion>, RecommendationError> {
        let request = self.build_request(mood, weather)?;

        debug!("Calling Gemini model {}", self.client.model);

        let response = self.client.client.execute(request).await.map_err(|err| {
            debug!(
                "Gemini transport failure: {}",
                Self::describe_transport_error(err)
            );
            RecommendationError::TransportFailure
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|_| RecommendationError::TransportFailure)?;

        debug!("Gemini responded with status {} ({} bytes)", status, text.len());

        Self::parse_response(status, &text)
    }
}
