pub mod favorites_json;
pub mod sqlite_area_codes;

pub use favorites_json::JsonFavoritesStore;
pub use sqlite_area_codes::SqliteAreaCodeDirectory;
