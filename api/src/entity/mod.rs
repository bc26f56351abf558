//! SeaORM table models
//!
//! One module per SQLite table. The DDL that creates these tables lives in
//! `adapters::sqlite::schema`; keep the two in sync.

pub mod applications;
pub mod guides;
pub mod partners;
pub mod pets;
pub mod products;
pub mod seed_versions;
pub mod stories;
pub mod tips;
