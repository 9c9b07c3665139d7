//! Mock sentiment sources for running without the remote API.
//!
//! Return fixed data after a simulated network delay.

use crate::domain::sentiment::MoodStyle;
use crate::domain::{CityMood, DomainError, FetchError};
use crate::ports::{CityMoodSource, SentimentSource};
use std::time::Duration;
use tracing::info;

/// (city, sentiment, thinking, care)
const MOCK_CITIES: &[(&str, &str, &[&str], &[&str])] = &[
    ("Phoenix", "happy", &["Spring training", "Monsoon season"], &["Water", "Housing"]),
    ("Tempe", "excited", &["Graduation week"], &["Education", "Transit"]),
    ("Manhattan", "tired", &["Subway delays", "Rent"], &["Housing", "Safety"]),
    ("San Francisco", "mixed", &["AI startups"], &["Tech", "Housing", "Cost of living"]),
    ("Seattle", "calm", &["Rain", "Coffee"], &["Environment"]),
];

/// Serves a fixed directory payload.
pub struct MockSentimentSource {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockSentimentSource {
    /// Create a new mock source with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    fn payload() -> String {
        let mut cities = serde_json::Map::new();
        for (city, sentiment, thinking, care) in MOCK_CITIES {
            cities.insert(
                city.to_string(),
                serde_json::json!({
                    "what_is_their_sentiment": sentiment,
                    "what_are_people_thinking": thinking,
                    "what_do_people_care": care,
                }),
            );
        }
        serde_json::json!({ "data": serde_json::Value::Object(cities).to_string() }).to_string()
    }
}

impl Default for MockSentimentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SentimentSource for MockSentimentSource {
    async fn fetch_all_city_sentiment(&self) -> Result<String, FetchError> {
        info!("[MOCK] serving fixed city sentiment payload");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(Self::payload())
    }
}

/// Per-city moods from the same fixed table. Unknown cities fail the lookup.
pub struct MockMoodSource {
    delay_ms: u64,
}

impl MockMoodSource {
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockMoodSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CityMoodSource for MockMoodSource {
    async fn fetch_city_mood(&self, city: &str) -> Result<CityMood, DomainError> {
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        let (_, sentiment, _, _) = MOCK_CITIES
            .iter()
            .find(|(name, ..)| *name == city)
            .ok_or_else(|| DomainError::Lookup(format!("[MOCK] no mood for {}", city)))?;
        let style = MoodStyle::for_label(sentiment);
        Ok(CityMood {
            emoji: style.emoji.to_string(),
            label: style.label.to_string(),
        })
    }
}
