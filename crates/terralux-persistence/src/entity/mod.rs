//! `SeaORM` entities for the TerraLux catalog schema

pub mod prelude;

pub mod affiliate_click;
pub mod building_model;
pub mod consultation_request;
pub mod enums;
pub mod vendor;
