//! Model endpoints: read-only list/retrieve
//!
//! The list uses the reduced field set and supports filtering to a single
//! owning vendor; retrieve returns the full record with the vendor
//! embedded. Creation happens through the admin console and seeding
//! commands, never through this surface.

use actix_web::{HttpResponse, Scope, get, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use terralux_common::{AppError, TerraluxError};
use terralux_persistence::service::building_model;

use crate::model::{ModelDetail, ModelSummary};

pub fn routes() -> Scope {
    web::scope("/models").service(list_models).service(get_model)
}

#[derive(Debug, Deserialize)]
struct ListParams {
    vendor: Option<i64>,
}

#[get("")]
async fn list_models(
    db: web::Data<DatabaseConnection>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let records = building_model::list_with_vendor(&db, params.vendor).await?;

    let summaries: Vec<ModelSummary> = records
        .into_iter()
        .map(|(model, vendor)| ModelSummary::from_record(model, vendor))
        .collect();

    Ok(HttpResponse::Ok().json(summaries))
}

#[get("/{id}")]
async fn get_model(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let (model, vendor) = building_model::find_by_id_with_vendor(&db, id)
        .await?
        .ok_or(TerraluxError::ModelNotFound(id))?;

    Ok(HttpResponse::Ok().json(ModelDetail::from_record(model, vendor)))
}
