//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/file types here; adapters map into these.

use serde::{Deserialize, Serialize};

/// A city's aggregated mood. Built only by parsing a directory snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySentiment {
    pub city: String,
    pub emoji: String,
    pub label: String,
    /// Always within [0, 1].
    pub intensity: f64,
    pub what_people_thinking: Vec<String>,
    pub what_people_care: Vec<String>,
}

/// Raw contact as yielded by a contacts provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    /// Unnormalized, as stored on the device.
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Enrichment result for one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub emoji: String,
    pub mood: String,
}

/// Mood of a single city as returned by a per-city mood source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityMood {
    pub emoji: String,
    pub label: String,
}

/// City resolved from an area code. The primary directory may not know the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityLocation {
    pub city: String,
    pub state: Option<String>,
}

impl CityLocation {
    pub fn new(city: impl Into<String>, state: Option<&str>) -> Self {
        Self {
            city: city.into(),
            state: state.map(str::to_string),
        }
    }
}
