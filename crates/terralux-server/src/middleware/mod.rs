//! Actix-web middleware

pub mod identity;

pub use identity::IdentityExtractor;
