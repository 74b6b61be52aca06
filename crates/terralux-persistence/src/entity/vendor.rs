//! `SeaORM` Entity for the vendor table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{HealAlignment, VendorCategory, VendorStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub partner_name: String,
    pub website_url: Option<String>,
    /// The specific URL carrying TerraLux tracking parameters.
    pub affiliate_link: Option<String>,
    pub is_certified: bool,
    pub consultation_enabled: bool,
    /// "lat,lng" pair; plain text until PostGIS is adopted.
    pub coordinates: Option<String>,
    pub primary_category: VendorCategory,
    pub heal_alignment: HealAlignment,
    pub status: VendorStatus,
    pub metadata: Json,
    pub contact_info: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::building_model::Entity")]
    BuildingModel,
    #[sea_orm(has_many = "super::affiliate_click::Entity")]
    AffiliateClick,
    #[sea_orm(has_many = "super::consultation_request::Entity")]
    ConsultationRequest,
}

impl Related<super::building_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildingModel.def()
    }
}

impl Related<super::affiliate_click::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AffiliateClick.def()
    }
}

impl Related<super::consultation_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsultationRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
