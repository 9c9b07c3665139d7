//! Implements FavoritesStore using a JSON file.

use crate::domain::DomainError;
use crate::ports::FavoritesStore;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
struct FavoritesData {
    cities: Vec<String>,
}

/// JSON file-based favorites storage.
pub struct JsonFavoritesStore {
    path: std::path::PathBuf,
}

impl JsonFavoritesStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl FavoritesStore for JsonFavoritesStore {
    /// Missing file means no favorites yet. A corrupt file is logged and treated as empty.
    async fn load(&self) -> Result<Vec<String>, DomainError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DomainError::Store(format!("read favorites: {}", e))),
        };
        match serde_json::from_str::<FavoritesData>(&text) {
            Ok(data) => Ok(data.cities),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "favorites file unreadable; starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Write-replace: temp file, sync_all, then rename over the target.
    async fn save(&self, cities: &[String]) -> Result<(), DomainError> {
        let data = FavoritesData {
            cities: cities.to_vec(),
        };
        let json =
            serde_json::to_string_pretty(&data).map_err(|e| DomainError::Store(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Store(format!("create dir: {}", e)))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Store(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Store(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Store(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Store(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFavoritesStore::new(dir.path().join("favorites.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("favorites.json");
        let store = JsonFavoritesStore::new(&path);

        let cities = vec!["Tempe".to_string(), "Phoenix".to_string()];
        store.save(&cities).await.unwrap();

        assert_eq!(store.load().await.unwrap(), cities);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        assert!(JsonFavoritesStore::new(&path).load().await.unwrap().is_empty());
    }
}
