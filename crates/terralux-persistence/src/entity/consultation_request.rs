//! `SeaORM` Entity for the consultation_request table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::ConsultationStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "consultation_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Option<i64>,
    pub email: String,
    pub phone: String,
    /// Nulled when the vendor is deleted; the request itself survives.
    pub vendor_id: Option<i64>,
    /// Nulled when the model is deleted; the request itself survives.
    pub model_id: Option<i64>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: ConsultationStatus,
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
        on_delete = "SetNull"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::building_model::Entity",
        from = "Column::ModelId",
        to = "super::building_model::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    BuildingModel,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::building_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildingModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
