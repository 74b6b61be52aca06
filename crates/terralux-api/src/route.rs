//! Public API routing configuration

use actix_web::{Scope, web};

use crate::{building_model, consultation, vendor};

/// Create the public API routes, mounted under the server's context path.
pub fn routes() -> Scope {
    web::scope("")
        .service(vendor::routes())
        .service(building_model::routes())
        .service(consultation::routes())
}
