//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use moodmap::adapters::contacts::CsvContactsProvider;
use moodmap::adapters::persistence::{JsonFavoritesStore, SqliteAreaCodeDirectory};
use moodmap::adapters::sentiment::{
    DirectoryMoodSource, HttpSentimentSource, MockMoodSource, MockSentimentSource,
};
use moodmap::adapters::ui::tui::TuiInputPort;
use moodmap::ports::{CityMoodSource, FavoritesStore, InputPort, SentimentSource};
use moodmap::shared::config::AppConfig;
use moodmap::usecases::{
    AreaCodeLookup, CitySentimentDirectory, ContactEnricher, ContactsLoader, FavoritesService,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    moodmap::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded; using defaults");
        AppConfig::default()
    });
    let data_dir = cfg.data_dir_or_default();
    tokio::fs::create_dir_all(&data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("create data dir {}: {}", data_dir.display(), e))?;
    info!(path = %data_dir.display(), "data directory");

    // --- Directory ---
    let source: Arc<dyn SentimentSource> = if cfg.use_mock() {
        warn!("MOODMAP_USE_MOCK set, serving fixed city data");
        Arc::new(MockSentimentSource::new())
    } else {
        let url = cfg.api_url_or_default();
        info!(url = %url, "sentiment API");
        Arc::new(HttpSentimentSource::new(url, cfg.request_timeout())?)
    };
    let directory = Arc::new(CitySentimentDirectory::new(source));

    // --- Area codes: SQLite table when present, built-in table otherwise ---
    let db_path = cfg.area_code_db_or_default();
    let area_codes = if tokio::fs::try_exists(&db_path).await.unwrap_or(false) {
        let db = SqliteAreaCodeDirectory::connect(&db_path).await?;
        info!(path = %db.path().display(), "using area code database");
        AreaCodeLookup::with_primary(Arc::new(db))
    } else {
        info!("no area code database; using built-in table");
        AreaCodeLookup::builtin()
    };

    // --- Enrichment ---
    let moods: Arc<dyn CityMoodSource> = if cfg.use_mock() {
        Arc::new(MockMoodSource::new())
    } else {
        Arc::new(DirectoryMoodSource::new(Arc::clone(&directory)))
    };
    let enricher = Arc::new(ContactEnricher::new(Arc::new(area_codes), moods));
    let contacts_path = cfg.contacts_csv_or_default();
    info!(path = %contacts_path.display(), "contacts source");
    let loader = Arc::new(ContactsLoader::new(
        Arc::new(CsvContactsProvider::new(contacts_path)),
        enricher,
    ));

    // --- Favorites ---
    let store: Arc<dyn FavoritesStore> = Arc::new(JsonFavoritesStore::new(cfg.favorites_path()));
    let favorites = Arc::new(FavoritesService::load(store).await?);

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        directory,
        favorites,
        loader,
        cfg.page_size_or_default(),
    ));

    input_port.run().await?;

    Ok(())
}
