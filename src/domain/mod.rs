//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod area_code;
pub mod entities;
pub mod errors;
pub mod paging;
pub mod sentiment;

pub use entities::{CityLocation, CityMood, CitySentiment, Contact, ContactRow};
pub use errors::{DomainError, FetchError};
pub use sentiment::{MoodCategory, MoodStyle, TextTone};
