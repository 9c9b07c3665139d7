//! Application use cases. Orchestrate domain logic via ports.

pub mod area_code_lookup;
pub mod directory_service;
pub mod enrich_service;
pub mod favorites_service;

pub use area_code_lookup::AreaCodeLookup;
pub use directory_service::CitySentimentDirectory;
pub use enrich_service::{ContactEnricher, ContactsLoader, EnrichReport, LoadState};
pub use favorites_service::FavoritesService;
