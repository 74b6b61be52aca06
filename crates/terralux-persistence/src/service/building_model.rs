//! Building model store operations
//!
//! The slug is computed here from the display name; a collision surfaces
//! as `TerraluxError::DuplicateSlug` and is never overwritten. Concurrent
//! creations racing on the same slug are resolved by the store's unique
//! index (one writer succeeds, the other gets the violation).

use anyhow::Context;
use sea_orm::*;
use serde::{Deserialize, Serialize};

use terralux_common::{TerraluxError, slugify};

use crate::entity::{building_model, vendor};

const DEFAULT_RELATIONSHIP_TYPE: &str = "Manufacturer";

/// Caller-supplied fields for a new model. The slug is derived, not supplied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelData {
    pub vendor_id: i64,
    pub model_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default = "default_map")]
    pub specifications: serde_json::Value,
    #[serde(default = "default_list")]
    pub images: serde_json::Value,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub glb_file: Option<String>,
    #[serde(default = "default_relationship_type")]
    pub relationship_type: String,
}

fn default_map() -> serde_json::Value {
    serde_json::json!({})
}

fn default_list() -> serde_json::Value {
    serde_json::json!([])
}

fn default_relationship_type() -> String {
    DEFAULT_RELATIONSHIP_TYPE.to_string()
}

/// List models with their vendor, featured first then newest first,
/// optionally restricted to one vendor.
pub async fn list_with_vendor(
    db: &DatabaseConnection,
    vendor_id: Option<i64>,
) -> anyhow::Result<Vec<(building_model::Model, Option<vendor::Model>)>> {
    let mut select = building_model::Entity::find().find_also_related(vendor::Entity);

    if let Some(vendor_id) = vendor_id {
        select = select.filter(building_model::Column::VendorId.eq(vendor_id));
    }

    select
        .order_by_desc(building_model::Column::IsFeatured)
        .order_by_desc(building_model::Column::CreatedAt)
        .all(db)
        .await
        .context("failed to list models")
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> anyhow::Result<Option<building_model::Model>> {
    building_model::Entity::find_by_id(id)
        .one(db)
        .await
        .with_context(|| format!("failed to load model {}", id))
}

pub async fn find_by_id_with_vendor(
    db: &DatabaseConnection,
    id: i64,
) -> anyhow::Result<Option<(building_model::Model, Option<vendor::Model>)>> {
    building_model::Entity::find_by_id(id)
        .find_also_related(vendor::Entity)
        .one(db)
        .await
        .with_context(|| format!("failed to load model {}", id))
}

pub async fn slug_exists(db: &DatabaseConnection, slug: &str) -> anyhow::Result<bool> {
    let found = building_model::Entity::find()
        .filter(building_model::Column::Slug.eq(slug))
        .one(db)
        .await
        .with_context(|| format!("failed to check slug '{}'", slug))?;

    Ok(found.is_some())
}

/// Insert a model, deriving its slug from the display name.
///
/// A collision on the derived slug surfaces as
/// [`TerraluxError::DuplicateSlug`].
pub async fn create(
    db: &DatabaseConnection,
    data: ModelData,
) -> anyhow::Result<building_model::Model> {
    let slug = slugify(&data.model_name);
    let now = chrono::Utc::now().naive_utc();

    let entity = building_model::ActiveModel {
        vendor_id: Set(data.vendor_id),
        model_name: Set(data.model_name),
        slug: Set(slug.clone()),
        description: Set(data.description),
        price_range: Set(data.price_range),
        specifications: Set(data.specifications),
        images: Set(data.images),
        is_featured: Set(data.is_featured),
        glb_file: Set(data.glb_file),
        relationship_type: Set(data.relationship_type),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match entity.insert(db).await {
        Ok(model) => Ok(model),
        Err(err) => {
            if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                Err(TerraluxError::DuplicateSlug(slug).into())
            } else {
                Err(err).context("failed to create model")
            }
        }
    }
}

/// Insert a model unless its derived slug already exists.
///
/// Returns `None` when the slug is taken, whether detected by the lookup
/// or by losing the race at insert time. Suggestion-driven callers treat
/// `None` as a silent skip.
pub async fn create_if_new(
    db: &DatabaseConnection,
    data: ModelData,
) -> anyhow::Result<Option<building_model::Model>> {
    let slug = slugify(&data.model_name);

    if slug_exists(db, &slug).await? {
        return Ok(None);
    }

    match create(db, data).await {
        Ok(model) => Ok(Some(model)),
        Err(err) => match err.downcast_ref::<TerraluxError>() {
            Some(TerraluxError::DuplicateSlug(_)) => Ok(None),
            _ => Err(err),
        },
    }
}

/// Full-record update. The slug is fixed at creation; a renamed model
/// keeps its original slug.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    data: ModelData,
) -> anyhow::Result<building_model::Model> {
    let existing = find_by_id(db, id)
        .await?
        .ok_or(TerraluxError::ModelNotFound(id))?;

    let mut entity: building_model::ActiveModel = existing.into();
    entity.vendor_id = Set(data.vendor_id);
    entity.model_name = Set(data.model_name);
    entity.description = Set(data.description);
    entity.price_range = Set(data.price_range);
    entity.specifications = Set(data.specifications);
    entity.images = Set(data.images);
    entity.is_featured = Set(data.is_featured);
    entity.glb_file = Set(data.glb_file);
    entity.relationship_type = Set(data.relationship_type);
    entity.updated_at = Set(chrono::Utc::now().naive_utc());

    entity
        .update(db)
        .await
        .with_context(|| format!("failed to update model {}", id))
}

pub async fn delete(db: &DatabaseConnection, id: i64) -> anyhow::Result<bool> {
    let res = building_model::Entity::delete_by_id(id)
        .exec(db)
        .await
        .with_context(|| format!("failed to delete model {}", id))?;

    Ok(res.rows_affected > 0)
}

pub async fn delete_all(db: &DatabaseConnection) -> anyhow::Result<u64> {
    let res = building_model::Entity::delete_many()
        .exec(db)
        .await
        .context("failed to clear models")?;

    Ok(res.rows_affected)
}
