//! City sentiment directory: fetch -> parse -> sorted, atomically swapped snapshot.
//!
//! - One request per refresh via SentimentSource
//! - Payload is `{"data": "<json object keyed by city>"}` (the inner object is string-encoded)
//! - A failed refresh leaves the previous snapshot untouched

use crate::domain::sentiment::MoodStyle;
use crate::domain::{CitySentiment, FetchError};
use crate::ports::SentimentSource;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Sentiment assumed when a city object omits it.
const DEFAULT_SENTIMENT: &str = "neutral";

#[derive(Deserialize)]
struct Envelope {
    data: String,
}

#[derive(Deserialize)]
struct RawCity {
    #[serde(default)]
    what_is_their_sentiment: Option<String>,
    #[serde(default)]
    what_are_people_thinking: Option<Vec<String>>,
    #[serde(default)]
    what_do_people_care: Option<Vec<String>>,
}

/// Parse a full response body into records sorted by city name.
///
/// Duplicate city keys resolve to the last occurrence in the payload.
pub fn parse_snapshot(body: &str) -> Result<Vec<CitySentiment>, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("envelope: {}", e)))?;
    // BTreeMap: insertion overwrites earlier duplicates, iteration is ordinal by key.
    let raw: BTreeMap<String, RawCity> = serde_json::from_str(&envelope.data)
        .map_err(|e| FetchError::Parse(format!("city map: {}", e)))?;

    Ok(raw
        .into_iter()
        .map(|(city, info)| {
            let sentiment = info
                .what_is_their_sentiment
                .unwrap_or_else(|| DEFAULT_SENTIMENT.to_string());
            let style = MoodStyle::for_label(&sentiment);
            CitySentiment {
                city,
                emoji: style.emoji.to_string(),
                label: style.label.to_string(),
                intensity: style.intensity.clamp(0.0, 1.0),
                what_people_thinking: info.what_are_people_thinking.unwrap_or_default(),
                what_people_care: info.what_do_people_care.unwrap_or_default(),
            }
        })
        .collect())
}

#[derive(Default)]
struct Snapshot {
    cities: Arc<Vec<CitySentiment>>,
    updated_at: Option<DateTime<Utc>>,
}

/// Holds the current snapshot. Readers get an `Arc` to a complete collection, never a partial one.
pub struct CitySentimentDirectory {
    source: Arc<dyn SentimentSource>,
    snapshot: RwLock<Snapshot>,
    /// Serializes refreshes so there is a single writer at a time.
    refresh_lock: Mutex<()>,
}

impl CitySentimentDirectory {
    pub fn new(source: Arc<dyn SentimentSource>) -> Self {
        Self {
            source,
            snapshot: RwLock::new(Snapshot::default()),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Fetch and replace the whole snapshot. Returns the number of cities loaded.
    pub async fn refresh(&self) -> Result<usize, FetchError> {
        let _writer = self.refresh_lock.lock().await;

        let body = self.source.fetch_all_city_sentiment().await.map_err(|e| {
            warn!(error = %e, "sentiment fetch failed; keeping previous snapshot");
            e
        })?;
        debug!(body_len = body.len(), "sentiment payload received");

        let cities = parse_snapshot(&body).map_err(|e| {
            warn!(error = %e, "sentiment payload rejected; keeping previous snapshot");
            e
        })?;
        let count = cities.len();
        let now = Utc::now();

        {
            let mut snapshot = self.snapshot.write().await;
            snapshot.cities = Arc::new(cities);
            snapshot.updated_at = Some(now);
        }

        info!(cities = count, updated_at = %now, "city sentiment directory refreshed");
        Ok(count)
    }

    /// Current snapshot, sorted ascending by city name (case-sensitive ordinal).
    pub async fn all(&self) -> Arc<Vec<CitySentiment>> {
        Arc::clone(&self.snapshot.read().await.cities)
    }

    /// Case-insensitive substring match on the city name. Empty query returns everything.
    pub async fn filter(&self, query: &str) -> Vec<CitySentiment> {
        let all = self.all().await;
        if query.is_empty() {
            return all.as_ref().clone();
        }
        let needle = query.to_lowercase();
        all.iter()
            .filter(|c| c.city.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Exact-name lookup.
    pub async fn get(&self, city: &str) -> Option<CitySentiment> {
        let all = self.all().await;
        all.binary_search_by(|c| c.city.as_str().cmp(city))
            .ok()
            .map(|idx| all[idx].clone())
    }

    /// Time of the last successful refresh.
    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.snapshot.read().await.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves queued responses in order, repeating the last one.
    struct StubSource {
        responses: Vec<Result<String, FetchError>>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(responses: Vec<Result<String, FetchError>>) -> Self {
            Self {
                responses,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl SentimentSource for StubSource {
        async fn fetch_all_city_sentiment(&self) -> Result<String, FetchError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let idx = n.min(self.responses.len() - 1);
            self.responses[idx].clone()
        }
    }

    fn envelope(inner: &str) -> String {
        serde_json::json!({ "data": inner }).to_string()
    }

    fn sample() -> String {
        envelope(
            r#"{
                "Tempe": {"what_is_their_sentiment": "calm", "what_are_people_thinking": ["heat"], "what_do_people_care": ["water"]},
                "Austin": {"what_is_their_sentiment": "Excited", "what_are_people_thinking": [], "what_do_people_care": ["music", "tech"]},
                "boston": {"what_is_their_sentiment": "gloomy"},
                "Phoenix": {"what_is_their_sentiment": "happy", "what_are_people_thinking": ["suns", "traffic"], "what_do_people_care": []}
            }"#,
        )
    }

    #[test]
    fn test_parse_sorted_ordinal() {
        let cities = parse_snapshot(&sample()).unwrap();
        let names: Vec<&str> = cities.iter().map(|c| c.city.as_str()).collect();
        // Uppercase sorts before lowercase in an ordinal compare.
        assert_eq!(names, vec!["Austin", "Phoenix", "Tempe", "boston"]);
        assert!(cities.iter().all(|c| (0.0..=1.0).contains(&c.intensity)));

        let phoenix = &cities[1];
        assert_eq!(phoenix.emoji, "😊");
        assert_eq!(phoenix.label, "Happy");
        assert_eq!(phoenix.what_people_thinking, vec!["suns", "traffic"]);
    }

    #[test]
    fn test_parse_defaults_and_unknown_label() {
        let cities = parse_snapshot(&envelope(r#"{"Reno": {}, "Waco": {"what_is_their_sentiment": "meh"}}"#)).unwrap();
        assert_eq!(cities[0].city, "Reno");
        assert_eq!(cities[0].label, "Neutral");
        assert!(cities[0].what_people_care.is_empty());
        assert_eq!(cities[1].label, "Unknown");
        assert_eq!(cities[1].emoji, "🤔");
        assert_eq!(cities[1].intensity, 0.5);
    }

    #[test]
    fn test_parse_duplicate_keys_last_wins() {
        let inner = r#"{"Mesa": {"what_is_their_sentiment": "sad"}, "Mesa": {"what_is_their_sentiment": "happy"}}"#;
        let cities = parse_snapshot(&envelope(inner)).unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].label, "Happy");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for body in [
            "not json".to_string(),
            r#"{"data": 5}"#.to_string(),
            r#"{"other": "{}"}"#.to_string(),
            envelope("[1, 2]"),
            envelope(r#"{"Mesa": "happy"}"#),
            envelope(r#"{"Mesa": {"what_are_people_thinking": "one"}}"#),
        ] {
            assert!(
                matches!(parse_snapshot(&body), Err(FetchError::Parse(_))),
                "accepted {body}"
            );
        }
    }

    #[tokio::test]
    async fn test_refresh_then_all_filter_get() {
        let dir = CitySentimentDirectory::new(Arc::new(StubSource::new(vec![Ok(sample())])));
        assert!(dir.all().await.is_empty());
        assert!(dir.last_updated().await.is_none());

        assert_eq!(dir.refresh().await.unwrap(), 4);
        assert!(dir.last_updated().await.is_some());
        assert_eq!(dir.all().await.len(), 4);

        assert_eq!(dir.filter("").await, dir.all().await.as_ref().clone());
        let hits: Vec<String> = dir.filter("O").await.into_iter().map(|c| c.city).collect();
        assert_eq!(hits, vec!["Phoenix", "boston"]);
        assert!(dir.filter("zzz").await.is_empty());

        assert_eq!(dir.get("Tempe").await.unwrap().label, "Calm");
        assert!(dir.get("tempe").await.is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_snapshot() {
        let source = StubSource::new(vec![
            Ok(sample()),
            Err(FetchError::Network("timeout".into())),
            Ok("{\"data\": \"oops\"}".into()),
        ]);
        let dir = CitySentimentDirectory::new(Arc::new(source));
        dir.refresh().await.unwrap();
        let stamp = dir.last_updated().await;

        assert_eq!(
            dir.refresh().await,
            Err(FetchError::Network("timeout".into()))
        );
        assert!(matches!(dir.refresh().await, Err(FetchError::Parse(_))));
        assert_eq!(dir.all().await.len(), 4);
        assert_eq!(dir.last_updated().await, stamp);
    }
}
