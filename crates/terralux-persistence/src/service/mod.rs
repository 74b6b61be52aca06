//! Catalog services over the `SeaORM` entities
//!
//! Free functions taking a `DatabaseConnection`, one module per table.
//! Business rules live with the callers; these functions only enforce
//! field types, enum codes, and slug uniqueness.

pub mod affiliate_click;
pub mod building_model;
pub mod consultation;
pub mod vendor;
