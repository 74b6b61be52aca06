//! TerraLux Common - Shared types and utilities
//!
//! This crate provides the foundational types used across all TerraLux
//! components:
//! - Error types and the actix-web error wrapper
//! - Slug derivation for model names
//! - The request identity attached by the upstream auth layer

pub mod error;
pub mod identity;
pub mod slug;

// Re-exports for convenience
pub use error::{AppError, TerraluxError};
pub use identity::Identity;
pub use slug::slugify;
