//! HTTP server setup
//!
//! One server carries both surfaces: the public API under the context path
//! and the admin console under `/admin`. Protecting `/admin` is the
//! deployment's job, the same boundary that supplies request identity.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};
use sea_orm::DatabaseConnection;

use terralux_suggest::ModelSuggester;

use crate::middleware::IdentityExtractor;

/// Creates and binds the HTTP server.
pub fn http_server(
    db: DatabaseConnection,
    suggester: Arc<dyn ModelSuggester>,
    context_path: String,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    // DatabaseConnection is not Clone when sea-orm's `mock` feature is
    // unified in (dev-dependencies enable it), so share it via Data's Arc.
    let db = web::Data::new(db);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(IdentityExtractor)
            .app_data(db.clone())
            .app_data(web::Data::new(suggester.clone()))
            .service(web::scope(&context_path).service(terralux_api::routes()))
            .service(terralux_console::routes())
    })
    .bind((address, port))?
    .run())
}
