//! TerraLux Persistence - Database entities and catalog services
//!
//! This crate provides:
//! - SeaORM entity definitions for the four catalog tables
//! - Catalog service functions (create / retrieve / list / update / delete)
//!
//! Referential integrity follows the schema: a vendor exclusively owns its
//! models and click records (delete cascades), while consultation requests
//! survive deletion of the vendor/model they reference.

pub mod entity;
pub mod service;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;
