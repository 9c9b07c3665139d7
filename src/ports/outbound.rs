//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CityLocation, CityMood, Contact, DomainError, FetchError};

/// Remote source of the whole city sentiment payload.
#[async_trait::async_trait]
pub trait SentimentSource: Send + Sync {
    /// Fetch the raw response body: a JSON envelope `{"data": "<json string>"}`.
    /// Transport failures map to `FetchError::Network`; parsing is the caller's job.
    async fn fetch_all_city_sentiment(&self) -> Result<String, FetchError>;
}

/// Mood lookup for a single city. May fail; the enricher substitutes a fallback.
#[async_trait::async_trait]
pub trait CityMoodSource: Send + Sync {
    async fn fetch_city_mood(&self, city: &str) -> Result<CityMood, DomainError>;
}

/// Yields the (name, raw phone) pairs to enrich.
#[async_trait::async_trait]
pub trait ContactsProvider: Send + Sync {
    async fn read_contacts(&self) -> Result<Vec<Contact>, DomainError>;
}

/// Primary, replaceable area code table. `Ok(None)` means "not known here".
#[async_trait::async_trait]
pub trait AreaCodeDirectory: Send + Sync {
    async fn lookup(&self, area_code: &str) -> Result<Option<CityLocation>, DomainError>;
}

/// Favorite city names, persisted in insertion order.
#[async_trait::async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn load(&self) -> Result<Vec<String>, DomainError>;

    async fn save(&self, cities: &[String]) -> Result<(), DomainError>;
}
