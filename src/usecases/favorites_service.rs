//! Favorite cities. Kept in memory, persisted through FavoritesStore on every change.

use crate::domain::{CitySentiment, DomainError};
use crate::ports::FavoritesStore;
use crate::usecases::directory_service::CitySentimentDirectory;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct FavoritesService {
    store: Arc<dyn FavoritesStore>,
    cities: Mutex<Vec<String>>,
}

impl FavoritesService {
    /// Load persisted favorites from the store.
    pub async fn load(store: Arc<dyn FavoritesStore>) -> Result<Self, DomainError> {
        let cities = store.load().await?;
        info!(count = cities.len(), "favorites loaded");
        Ok(Self {
            store,
            cities: Mutex::new(cities),
        })
    }

    /// Add or remove `city`. Returns true when it is now a favorite.
    pub async fn toggle(&self, city: &str) -> Result<bool, DomainError> {
        let mut cities = self.cities.lock().await;
        // Memory only changes once the store has accepted the new list.
        let mut next = cities.clone();
        let now_favorite = match next.iter().position(|c| c == city) {
            Some(idx) => {
                next.remove(idx);
                false
            }
            None => {
                next.push(city.to_string());
                true
            }
        };
        self.store.save(&next).await?;
        *cities = next;
        info!(city, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    pub async fn contains(&self, city: &str) -> bool {
        self.cities.lock().await.iter().any(|c| c == city)
    }

    /// Favorite names in the order they were added.
    pub async fn list(&self) -> Vec<String> {
        self.cities.lock().await.clone()
    }

    /// Favorites that exist in the current directory snapshot, in favorite order.
    pub async fn favorites_view(&self, directory: &CitySentimentDirectory) -> Vec<CitySentiment> {
        let names = self.list().await;
        let mut view = Vec::with_capacity(names.len());
        for name in names {
            if let Some(city) = directory.get(&name).await {
                view.push(city);
            }
        }
        view
    }
}
