//! SQLite-backed area code directory via libsql. Implements AreaCodeDirectory.
//!
//! Single `area_codes` table keyed by the three-digit code. State may be NULL.

use crate::domain::{CityLocation, DomainError};
use crate::ports::AreaCodeDirectory;
use libsql::{Database, params};
use std::path::{Path, PathBuf};
use tracing::info;

const AREA_CODES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS area_codes (
    code TEXT PRIMARY KEY,
    city TEXT NOT NULL,
    state TEXT
)"#;

pub struct SqliteAreaCodeDirectory {
    db: Database,
    db_path: PathBuf,
}

impl SqliteAreaCodeDirectory {
    /// Open (or create) the database file and ensure the schema exists.
    pub async fn connect(db_path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DomainError::Store(e.to_string()))?;
        }
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;
        let conn = db.connect().map_err(|e| DomainError::Store(e.to_string()))?;
        conn.execute(AREA_CODES_TABLE, ())
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;

        info!(path = %db_path.display(), "area code database opened");
        Ok(Self { db, db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Insert or replace entries in one transaction.
    pub async fn upsert(&self, entries: &[(&str, CityLocation)]) -> Result<(), DomainError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| DomainError::Store(e.to_string()))?;
        let tx = conn
            .transaction()
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;
        for (code, loc) in entries {
            tx.execute(
                r#"
                INSERT INTO area_codes (code, city, state) VALUES (?1, ?2, ?3)
                ON CONFLICT (code) DO UPDATE SET city = excluded.city, state = excluded.state
                "#,
                params![*code, loc.city.as_str(), loc.state.clone()],
            )
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;
        }
        tx.commit()
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl AreaCodeDirectory for SqliteAreaCodeDirectory {
    async fn lookup(&self, area_code: &str) -> Result<Option<CityLocation>, DomainError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| DomainError::Lookup(e.to_string()))?;
        let mut rows = conn
            .query(
                "SELECT city, state FROM area_codes WHERE code = ?1",
                params![area_code],
            )
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))?;
        let Some(row) = rows
            .next()
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))?
        else {
            return Ok(None);
        };
        let city: String = row.get(0).map_err(|e| DomainError::Lookup(e.to_string()))?;
        let state: Option<String> = row.get::<String>(1).ok().filter(|s| !s.is_empty());
        Ok(Some(CityLocation { city, state }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_and_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let db = SqliteAreaCodeDirectory::connect(dir.path().join("area_codes.db"))
            .await
            .unwrap();

        db.upsert(&[
            ("303", CityLocation::new("Denver", Some("Colorado"))),
            ("602", CityLocation::new("Glendale", None)),
        ])
        .await
        .unwrap();
        db.upsert(&[("602", CityLocation::new("Phoenix", None))])
            .await
            .unwrap();

        let denver = db.lookup("303").await.unwrap().unwrap();
        assert_eq!(denver.city, "Denver");
        assert_eq!(denver.state.as_deref(), Some("Colorado"));

        let phoenix = db.lookup("602").await.unwrap().unwrap();
        assert_eq!(phoenix.city, "Phoenix");
        assert_eq!(phoenix.state, None);

        assert!(db.lookup("999").await.unwrap().is_none());
    }
}
