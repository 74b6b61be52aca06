//! Closed enumerations stored as short string codes
//!
//! The codes are the wire and storage representation; serde and the
//! database mapping share them so an invalid code is rejected at the
//! serialization boundary rather than silently stored.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Primary category of a vendor's building system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum VendorCategory {
    #[sea_orm(string_value = "PREFAB")]
    #[serde(rename = "PREFAB")]
    Prefab,
    #[sea_orm(string_value = "NATURAL")]
    #[serde(rename = "NATURAL")]
    Natural,
    #[sea_orm(string_value = "DOMES")]
    #[serde(rename = "DOMES")]
    Domes,
    #[sea_orm(string_value = "3D_PRINT")]
    #[serde(rename = "3D_PRINT")]
    ThreeDPrint,
    #[sea_orm(string_value = "TREE")]
    #[serde(rename = "TREE")]
    Tree,
    #[sea_orm(string_value = "HEALTHY")]
    #[serde(rename = "HEALTHY")]
    Healthy,
    #[sea_orm(string_value = "COMMUNITY")]
    #[serde(rename = "COMMUNITY")]
    Community,
}

/// Coarse mission-fit rating assigned to a vendor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum HealAlignment {
    #[sea_orm(string_value = "HIGH")]
    #[serde(rename = "HIGH")]
    High,
    #[default]
    #[sea_orm(string_value = "MEDIUM")]
    #[serde(rename = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "LOW")]
    #[serde(rename = "LOW")]
    Low,
}

/// Lifecycle status of a vendor relationship.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum VendorStatus {
    #[sea_orm(string_value = "CORE_COUNCIL")]
    #[serde(rename = "CORE_COUNCIL")]
    CoreCouncil,
    #[sea_orm(string_value = "PRIORITY")]
    #[serde(rename = "PRIORITY")]
    Priority,
    #[default]
    #[sea_orm(string_value = "ACTIVE")]
    #[serde(rename = "ACTIVE")]
    Active,
}

/// Lifecycle status of a consultation request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ConsultationStatus {
    #[default]
    #[sea_orm(string_value = "PENDING")]
    #[serde(rename = "PENDING")]
    Pending,
    #[sea_orm(string_value = "CONTACTED")]
    #[serde(rename = "CONTACTED")]
    Contacted,
    #[sea_orm(string_value = "COMPLETED")]
    #[serde(rename = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "CANCELLED")]
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveEnum;

    use super::*;

    #[test]
    fn test_category_codes_round_trip() {
        for category in [
            VendorCategory::Prefab,
            VendorCategory::Natural,
            VendorCategory::Domes,
            VendorCategory::ThreeDPrint,
            VendorCategory::Tree,
            VendorCategory::Healthy,
            VendorCategory::Community,
        ] {
            let code = category.to_value();
            assert_eq!(VendorCategory::try_from_value(&code).unwrap(), category);
        }
    }

    #[test]
    fn test_stored_codes_match_wire_codes() {
        assert_eq!(VendorCategory::ThreeDPrint.to_value(), "3D_PRINT");
        assert_eq!(VendorStatus::CoreCouncil.to_value(), "CORE_COUNCIL");
        assert_eq!(ConsultationStatus::Pending.to_value(), "PENDING");
        assert_eq!(HealAlignment::High.to_value(), "HIGH");
    }

    #[test]
    fn test_serde_uses_the_same_codes() {
        let json = serde_json::to_string(&VendorCategory::ThreeDPrint).unwrap();
        assert_eq!(json, "\"3D_PRINT\"");
        let parsed: VendorCategory = serde_json::from_str("\"DOMES\"").unwrap();
        assert_eq!(parsed, VendorCategory::Domes);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(serde_json::from_str::<VendorCategory>("\"YURTS\"").is_err());
        assert!(VendorStatus::try_from_value(&"RETIRED".to_string()).is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(HealAlignment::default(), HealAlignment::Medium);
        assert_eq!(VendorStatus::default(), VendorStatus::Active);
        assert_eq!(ConsultationStatus::default(), ConsultationStatus::Pending);
    }
}
