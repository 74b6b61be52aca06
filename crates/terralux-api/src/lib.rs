//! TerraLux API - Public REST endpoints
//!
//! Resource handlers over the catalog store:
//! - vendors: full CRUD plus affiliate click tracking
//! - models: read-only list/retrieve with a reduced list field set
//! - consultations: create-only public intake

pub mod building_model;
pub mod consultation;
pub mod model;
pub mod route;
pub mod vendor;

pub use route::routes;
