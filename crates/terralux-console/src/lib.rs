//! TerraLux Console - Admin endpoints
//!
//! The operator surface for the AI suggestion workflow: preview drafts for
//! a vendor, then confirm to persist them as models.

pub mod model;
pub mod route;
pub mod suggest;

pub use route::routes;
pub use suggest::persist_drafts;
