//! Vendor endpoints: full CRUD plus affiliate click tracking

use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, route, web};
use sea_orm::DatabaseConnection;
use tracing::info;

use terralux_common::{AppError, Identity, TerraluxError};
use terralux_persistence::service::{affiliate_click, vendor};

use crate::model::ClickTracked;

pub fn routes() -> Scope {
    web::scope("/vendors")
        .service(list_vendors)
        .service(create_vendor)
        .service(get_vendor)
        .service(update_vendor)
        .service(delete_vendor)
        .service(track_click)
}

#[get("")]
async fn list_vendors(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let vendors = vendor::find_all(&db).await?;
    Ok(HttpResponse::Ok().json(vendors))
}

#[post("")]
async fn create_vendor(
    db: web::Data<DatabaseConnection>,
    body: web::Json<vendor::VendorData>,
) -> Result<HttpResponse, AppError> {
    let created = vendor::create(&db, body.into_inner()).await?;
    info!("created vendor '{}' ({})", created.partner_name, created.id);
    Ok(HttpResponse::Created().json(created))
}

#[get("/{id}")]
async fn get_vendor(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = vendor::find_by_id(&db, id)
        .await?
        .ok_or(TerraluxError::VendorNotFound(id))?;
    Ok(HttpResponse::Ok().json(found))
}

// PATCH is accepted but carries full-update semantics, matching the store's
// lack of partial patch support.
#[route("/{id}", method = "PUT", method = "PATCH")]
async fn update_vendor(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i64>,
    body: web::Json<vendor::VendorData>,
) -> Result<HttpResponse, AppError> {
    let updated = vendor::update(&db, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
async fn delete_vendor(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if !vendor::delete(&db, id).await? {
        return Err(TerraluxError::VendorNotFound(id).into());
    }
    info!("deleted vendor {}", id);
    Ok(HttpResponse::NoContent().finish())
}

#[post("/{id}/track_click")]
async fn track_click(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = vendor::find_by_id(&db, id)
        .await?
        .ok_or(TerraluxError::VendorNotFound(id))?;

    let user_id = Identity::from_request(&req).map(|identity| identity.user_id);
    let click = affiliate_click::track(&db, found.id, user_id).await?;

    Ok(HttpResponse::Created().json(ClickTracked {
        status: "click tracked",
        click_id: click.id,
    }))
}
