//! TerraLux server - configuration, startup, middleware, and seeding
//!
//! The binary serves the public API and admin console, and doubles as the
//! batch entry point for the seeding commands.

pub mod middleware;
pub mod model;
pub mod seed;
pub mod startup;
