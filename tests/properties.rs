//! Properties of directory parsing, label mapping, filtering and paging over generated inputs.

use moodmap::domain::paging::{page, total_pages};
use moodmap::domain::sentiment::{FALLBACK_EMOJI, NEUTRAL_INTENSITY, UNKNOWN_LABEL};
use moodmap::domain::{FetchError, MoodCategory, MoodStyle};
use moodmap::ports::SentimentSource;
use moodmap::usecases::CitySentimentDirectory;
use moodmap::usecases::directory_service::parse_snapshot;
use proptest::prelude::*;
use proptest::test_runner::Config;
use std::collections::BTreeMap;
use std::sync::Arc;

const KNOWN_LABELS: &[&str] = &[
    "happy", "joyful", "positive", "very positive", "sad", "negative", "very negative",
    "angry", "fear", "excited", "calm", "tired", "surprised", "confident", "neutral", "mixed",
];

type RawCity = (String, Vec<String>, Vec<String>);

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(KNOWN_LABELS).prop_map(str::to_string),
        "\\PC{0,12}",
    ]
}

fn cities_strategy() -> impl Strategy<Value = BTreeMap<String, RawCity>> {
    prop::collection::btree_map(
        "[A-Za-z][A-Za-z ]{0,11}",
        (
            label_strategy(),
            prop::collection::vec("\\PC{0,10}", 0..4),
            prop::collection::vec("[a-z]{1,8}", 0..4),
        ),
        0..20,
    )
}

fn payload(cities: &BTreeMap<String, RawCity>) -> String {
    let mut inner = serde_json::Map::new();
    for (name, (sentiment, thinking, care)) in cities {
        inner.insert(
            name.clone(),
            serde_json::json!({
                "what_is_their_sentiment": sentiment,
                "what_are_people_thinking": thinking,
                "what_do_people_care": care,
            }),
        );
    }
    serde_json::json!({ "data": serde_json::Value::Object(inner).to_string() }).to_string()
}

struct FixedPayload(String);

#[async_trait::async_trait]
impl SentimentSource for FixedPayload {
    async fn fetch_all_city_sentiment(&self) -> Result<String, FetchError> {
        Ok(self.0.clone())
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime")
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn snapshot_is_sorted_one_record_per_key(cities in cities_strategy()) {
        let parsed = parse_snapshot(&payload(&cities)).expect("valid payload");

        prop_assert_eq!(parsed.len(), cities.len());
        for pair in parsed.windows(2) {
            prop_assert!(pair[0].city < pair[1].city);
        }
        for (record, (name, (_, thinking, care))) in parsed.iter().zip(cities.iter()) {
            prop_assert_eq!(&record.city, name);
            prop_assert!((0.0..=1.0).contains(&record.intensity));
            prop_assert_eq!(&record.what_people_thinking, thinking);
            prop_assert_eq!(&record.what_people_care, care);
        }
    }

    #[test]
    fn unknown_labels_map_to_fallback(label in "\\PC{0,24}") {
        let normalized = label.trim().to_lowercase();
        prop_assume!(!KNOWN_LABELS.contains(&normalized.as_str()));

        let style = MoodStyle::for_label(&label);
        prop_assert_eq!(style.category, MoodCategory::Unknown);
        prop_assert_eq!(style.emoji, FALLBACK_EMOJI);
        prop_assert_eq!(style.label, UNKNOWN_LABEL);
        prop_assert_eq!(style.intensity, NEUTRAL_INTENSITY);
    }

    #[test]
    fn filter_is_case_insensitive_subset(cities in cities_strategy(), query in "[A-Za-z ]{0,3}") {
        let rt = runtime();
        let directory = CitySentimentDirectory::new(Arc::new(FixedPayload(payload(&cities))));
        rt.block_on(directory.refresh()).expect("refresh");

        let all = rt.block_on(directory.all());
        let hits = rt.block_on(directory.filter(&query));
        let needle = query.to_lowercase();

        if query.is_empty() {
            prop_assert_eq!(&hits, all.as_ref());
        }
        let expected: Vec<_> = all
            .iter()
            .filter(|c| c.city.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        prop_assert_eq!(&hits, &expected);
        prop_assert!(hits.iter().all(|h| all.contains(h)));
        prop_assert_eq!(rt.block_on(directory.filter(&query.to_uppercase())), hits.clone());
        prop_assert_eq!(rt.block_on(directory.filter(&query.to_lowercase())), hits);
    }

    #[test]
    fn pages_past_the_end_are_empty(
        items in prop::collection::vec(any::<u16>(), 0..60),
        page_size in 0usize..12,
        extra in 0usize..5,
    ) {
        let pages = total_pages(items.len(), page_size);
        prop_assert!(pages >= 1);
        prop_assert!(page(&items, page_size, pages + extra).is_empty());

        let first = page(&items, page_size, 0);
        let expected = page_size.max(1).min(items.len());
        prop_assert_eq!(&first[..], &items[..expected]);

        let total: usize = (0..pages).map(|k| page(&items, page_size, k).len()).sum();
        prop_assert_eq!(total, items.len());
    }
}
