//! Application configuration. API endpoint, paths, paging.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://mainoverallapi.vercel.app";
/// Cities per page on the browse screen.
pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Sentiment API endpoint. Read from MOODMAP_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Whole-request timeout in seconds (default 15). Read from MOODMAP_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Base directory for local files. Read from MOODMAP_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Contacts CSV export (`name,phone`). Read from MOODMAP_CONTACTS_CSV.
    #[serde(default)]
    pub contacts_csv: Option<String>,

    /// Optional SQLite area code table. Read from MOODMAP_AREA_CODE_DB.
    #[serde(default)]
    pub area_code_db: Option<String>,

    /// Read from MOODMAP_PAGE_SIZE.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Serve fixed data instead of calling the API. Read from MOODMAP_USE_MOCK.
    #[serde(default)]
    pub use_mock: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MOODMAP").try_parsing(true));
        if let Ok(path) = std::env::var("MOODMAP_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(15))
    }

    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or("./data"))
    }

    pub fn contacts_csv_or_default(&self) -> PathBuf {
        self.contacts_csv
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir_or_default().join("contacts.csv"))
    }

    pub fn area_code_db_or_default(&self) -> PathBuf {
        self.area_code_db
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir_or_default().join("area_codes.db"))
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir_or_default().join("favorites.json")
    }

    /// Never zero.
    pub fn page_size_or_default(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    pub fn use_mock(&self) -> bool {
        self.use_mock.unwrap_or(false)
    }
}
