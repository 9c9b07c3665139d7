//! Implements ContactsProvider from a CSV export (`name,phone` with a header row).
//!
//! Rows with an empty phone are skipped, matching a contact card with no number.

use crate::domain::{Contact, DomainError};
use crate::ports::ContactsProvider;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Deserialize)]
struct ContactRecord {
    name: String,
    #[serde(default)]
    phone: String,
}

pub struct CsvContactsProvider {
    path: PathBuf,
}

impl CsvContactsProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Parse CSV text into contacts. Header names are matched case-insensitively.
pub fn parse_contacts(text: &str) -> Result<Vec<Contact>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    let lowered: csv::StringRecord = headers.iter().map(|h| h.to_lowercase()).collect();
    rdr.set_headers(lowered);

    let mut contacts = Vec::new();
    for record in rdr.deserialize::<ContactRecord>() {
        let record = record?;
        if record.phone.is_empty() {
            debug!(name = %record.name, "contact has no phone; skipping");
            continue;
        }
        contacts.push(Contact::new(record.name, record.phone));
    }
    Ok(contacts)
}

#[async_trait::async_trait]
impl ContactsProvider for CsvContactsProvider {
    async fn read_contacts(&self) -> Result<Vec<Contact>, DomainError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Contacts(format!("read {}: {}", self.path.display(), e))
        })?;
        let contacts = parse_contacts(&text)
            .map_err(|e| DomainError::Contacts(format!("parse {}: {}", self.path.display(), e)))?;
        info!(path = %self.path.display(), count = contacts.len(), "contacts read");
        Ok(contacts)
    }
}
