//! moodmap: city mood directory and contact-to-city sentiment enrichment, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
