//! Sentiment adapters. Implement SentimentSource and CityMoodSource.
//!
//! Provides the HTTP source, a directory-backed mood source and mocks for offline use.

pub mod directory_mood;
pub mod http_source;
pub mod mock_adapter;

pub use directory_mood::DirectoryMoodSource;
pub use http_source::HttpSentimentSource;
pub use mock_adapter::{MockMoodSource, MockSentimentSource};
