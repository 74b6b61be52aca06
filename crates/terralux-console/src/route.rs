//! Console routing configuration

use actix_web::{Scope, web};

use crate::suggest;

/// Create the admin console routes, mounted under `/admin`.
pub fn routes() -> Scope {
    web::scope("/admin").service(suggest::routes())
}
