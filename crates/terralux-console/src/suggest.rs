//! Admin suggestion workflow: preview, then confirm
//!
//! One endpoint, two verbs, keyed by the target vendor:
//! - GET renders the drafts the suggester produced right now; nothing is
//!   persisted.
//! - POST queries the suggester afresh and persists non-colliding drafts.
//!   The preview's drafts are intentionally not cached or passed through,
//!   so a non-deterministic completion service can show and create different
//!   sets; operators confirm the shape of the suggestions, not the exact
//!   rows.

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

use terralux_persistence::entity::vendor;
use terralux_persistence::service::{building_model, vendor as vendor_service};
use terralux_suggest::{ModelSuggester, ModelSuggestion};

use crate::model::ApiResult;

pub fn routes() -> Scope {
    web::scope("/vendors/{vendor_id}/suggest-models")
        .service(preview_suggestions)
        .service(confirm_suggestions)
}

#[derive(Debug, Serialize)]
pub struct SuggestionPreview {
    pub vendor_id: i64,
    pub partner_name: String,
    pub suggestions: Vec<ModelSuggestion>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionOutcome {
    pub vendor_id: i64,
    pub partner_name: String,
    pub created: usize,
    pub skipped: usize,
}

/// Persist drafts for a vendor, silently skipping slug collisions.
///
/// Returns (created, skipped). Shared with the seeding commands.
pub async fn persist_drafts(
    db: &DatabaseConnection,
    vendor: &vendor::Model,
    suggestions: &[ModelSuggestion],
) -> anyhow::Result<(usize, usize)> {
    let mut created = 0;
    let mut skipped = 0;

    for suggestion in suggestions {
        let data = building_model::ModelData {
            vendor_id: vendor.id,
            model_name: suggestion.model_name.clone(),
            description: suggestion.description.clone(),
            price_range: suggestion.price_range.clone(),
            specifications: serde_json::to_value(&suggestion.specifications)?,
            images: serde_json::json!([]),
            is_featured: false,
            glb_file: None,
            relationship_type: "Manufacturer".to_string(),
        };

        match building_model::create_if_new(db, data).await? {
            Some(model) => {
                info!(
                    "created model '{}' ({}) for vendor '{}'",
                    model.model_name, model.slug, vendor.partner_name
                );
                created += 1;
            }
            None => skipped += 1,
        }
    }

    Ok((created, skipped))
}

async fn load_vendor(
    db: &DatabaseConnection,
    vendor_id: i64,
) -> Result<vendor::Model, HttpResponse> {
    match vendor_service::find_by_id(db, vendor_id).await {
        Ok(Some(found)) => Ok(found),
        Ok(None) => Err(ApiResult::http_not_found(format!(
            "vendor with id {} not found",
            vendor_id
        ))),
        Err(err) => Err(ApiResult::http_internal_error(err)),
    }
}

#[get("")]
async fn preview_suggestions(
    db: web::Data<DatabaseConnection>,
    suggester: web::Data<Arc<dyn ModelSuggester>>,
    path: web::Path<i64>,
) -> impl Responder {
    let vendor = match load_vendor(&db, path.into_inner()).await {
        Ok(vendor) => vendor,
        Err(response) => return response,
    };

    let suggestions = suggester
        .suggest_models(&vendor.partner_name, vendor.website_url.as_deref().unwrap_or(""))
        .await;

    ApiResult::http_success(SuggestionPreview {
        vendor_id: vendor.id,
        partner_name: vendor.partner_name,
        suggestions,
    })
}

#[post("")]
async fn confirm_suggestions(
    db: web::Data<DatabaseConnection>,
    suggester: web::Data<Arc<dyn ModelSuggester>>,
    path: web::Path<i64>,
) -> impl Responder {
    let vendor = match load_vendor(&db, path.into_inner()).await {
        Ok(vendor) => vendor,
        Err(response) => return response,
    };

    // Fresh sample; the preview's drafts are not replayed.
    let suggestions = suggester
        .suggest_models(&vendor.partner_name, vendor.website_url.as_deref().unwrap_or(""))
        .await;

    match persist_drafts(&db, &vendor, &suggestions).await {
        Ok((created, skipped)) => {
            info!(
                "suggestion confirm for '{}': {} created, {} skipped",
                vendor.partner_name, created, skipped
            );
            ApiResult::http_success(SuggestionOutcome {
                vendor_id: vendor.id,
                partner_name: vendor.partner_name,
                created,
                skipped,
            })
        }
        Err(err) => ApiResult::http_internal_error(err),
    }
}
