//! `SeaORM` Entity for the building_model table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "building_model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub vendor_id: i64,
    pub model_name: String,
    /// URL-friendly identifier, globally unique.
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// e.g. "$50k-$100k"
    pub price_range: String,
    pub specifications: Json,
    /// List of image URLs.
    pub images: Json,
    pub is_featured: bool,
    /// Storage path of an uploaded 3D asset, when present.
    pub glb_file: Option<String>,
    pub relationship_type: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Vendor,
    #[sea_orm(has_many = "super::consultation_request::Entity")]
    ConsultationRequest,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::consultation_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsultationRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
