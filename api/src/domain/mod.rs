//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for catalog records and applications
//! - `ports`: Trait definitions for the storage layer
//! - `seed`: The canonical catalog and reseed markers

pub mod entities;
pub mod ports;
pub mod seed;
