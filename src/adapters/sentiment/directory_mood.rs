//! Per-city mood backed by the directory snapshot.

use crate::domain::{CityMood, DomainError};
use crate::ports::CityMoodSource;
use crate::usecases::CitySentimentDirectory;
use std::sync::Arc;

/// Answers mood lookups from the latest directory snapshot.
/// Cities missing from the snapshot are lookup failures.
pub struct DirectoryMoodSource {
    directory: Arc<CitySentimentDirectory>,
}

impl DirectoryMoodSource {
    pub fn new(directory: Arc<CitySentimentDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait::async_trait]
impl CityMoodSource for DirectoryMoodSource {
    async fn fetch_city_mood(&self, city: &str) -> Result<CityMood, DomainError> {
        self.directory
            .get(city)
            .await
            .map(|c| CityMood {
                emoji: c.emoji,
                label: c.label,
            })
            .ok_or_else(|| DomainError::Lookup(format!("{} is not in the directory", city)))
    }
}
