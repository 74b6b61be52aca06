//! Vendor store operations

use anyhow::Context;
use sea_orm::*;
use serde::{Deserialize, Serialize};

use terralux_common::TerraluxError;

use crate::entity::enums::{HealAlignment, VendorCategory, VendorStatus};
use crate::entity::vendor;

/// Full set of caller-supplied vendor fields, used for both create and
/// full-record update.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VendorData {
    pub partner_name: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
    #[serde(default)]
    pub is_certified: bool,
    #[serde(default)]
    pub consultation_enabled: bool,
    #[serde(default)]
    pub coordinates: Option<String>,
    pub primary_category: VendorCategory,
    #[serde(default)]
    pub heal_alignment: HealAlignment,
    #[serde(default)]
    pub status: VendorStatus,
    #[serde(default = "default_map")]
    pub metadata: serde_json::Value,
    #[serde(default = "default_map")]
    pub contact_info: serde_json::Value,
}

fn default_map() -> serde_json::Value {
    serde_json::json!({})
}

pub async fn find_all(db: &DatabaseConnection) -> anyhow::Result<Vec<vendor::Model>> {
    vendor::Entity::find()
        .order_by_asc(vendor::Column::Id)
        .all(db)
        .await
        .context("failed to list vendors")
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> anyhow::Result<Option<vendor::Model>> {
    vendor::Entity::find_by_id(id)
        .one(db)
        .await
        .with_context(|| format!("failed to load vendor {}", id))
}

/// Seeding treats `partner_name` as a natural key; storage does not.
pub async fn find_by_name(
    db: &DatabaseConnection,
    partner_name: &str,
) -> anyhow::Result<Option<vendor::Model>> {
    vendor::Entity::find()
        .filter(vendor::Column::PartnerName.eq(partner_name))
        .one(db)
        .await
        .with_context(|| format!("failed to look up vendor '{}'", partner_name))
}

pub async fn create(db: &DatabaseConnection, data: VendorData) -> anyhow::Result<vendor::Model> {
    let entity = vendor::ActiveModel {
        partner_name: Set(data.partner_name),
        website_url: Set(data.website_url),
        affiliate_link: Set(data.affiliate_link),
        is_certified: Set(data.is_certified),
        consultation_enabled: Set(data.consultation_enabled),
        coordinates: Set(data.coordinates),
        primary_category: Set(data.primary_category),
        heal_alignment: Set(data.heal_alignment),
        status: Set(data.status),
        metadata: Set(data.metadata),
        contact_info: Set(data.contact_info),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    entity.insert(db).await.context("failed to create vendor")
}

/// Full-record update; there are no partial patch semantics.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    data: VendorData,
) -> anyhow::Result<vendor::Model> {
    let existing = find_by_id(db, id)
        .await?
        .ok_or(TerraluxError::VendorNotFound(id))?;

    let mut entity: vendor::ActiveModel = existing.into();
    entity.partner_name = Set(data.partner_name);
    entity.website_url = Set(data.website_url);
    entity.affiliate_link = Set(data.affiliate_link);
    entity.is_certified = Set(data.is_certified);
    entity.consultation_enabled = Set(data.consultation_enabled);
    entity.coordinates = Set(data.coordinates);
    entity.primary_category = Set(data.primary_category);
    entity.heal_alignment = Set(data.heal_alignment);
    entity.status = Set(data.status);
    entity.metadata = Set(data.metadata);
    entity.contact_info = Set(data.contact_info);

    entity
        .update(db)
        .await
        .with_context(|| format!("failed to update vendor {}", id))
}

/// Deletes the vendor. Owned models and click records go with it (cascade);
/// consultation requests keep their rows with a nulled vendor reference.
pub async fn delete(db: &DatabaseConnection, id: i64) -> anyhow::Result<bool> {
    let res = vendor::Entity::delete_by_id(id)
        .exec(db)
        .await
        .with_context(|| format!("failed to delete vendor {}", id))?;

    Ok(res.rows_affected > 0)
}

pub async fn delete_all(db: &DatabaseConnection) -> anyhow::Result<u64> {
    let res = vendor::Entity::delete_many()
        .exec(db)
        .await
        .context("failed to clear vendors")?;

    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    #[test]
    fn test_vendor_data_minimal_body() {
        let data: VendorData = serde_json::from_str(
            r#"{"partner_name": "Pacific Domes", "primary_category": "DOMES"}"#,
        )
        .unwrap();
        assert_eq!(data.heal_alignment, HealAlignment::Medium);
        assert_eq!(data.status, VendorStatus::Active);
        assert!(!data.is_certified);
        assert_eq!(data.metadata, serde_json::json!({}));
    }

    #[test]
    fn test_vendor_data_rejects_unknown_category() {
        let result: Result<VendorData, _> = serde_json::from_str(
            r#"{"partner_name": "Yurt World", "primary_category": "YURTS"}"#,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_then_get_returns_every_supplied_field() {
        let stored = vendor::Model {
            id: 1,
            partner_name: "Pacific Domes".to_string(),
            website_url: Some("https://pacificdomes.com".to_string()),
            affiliate_link: Some("https://pacificdomes.com/?ref=terralux".to_string()),
            is_certified: true,
            consultation_enabled: true,
            coordinates: Some("45.5152,-122.6784".to_string()),
            primary_category: VendorCategory::Domes,
            heal_alignment: HealAlignment::Medium,
            status: VendorStatus::Active,
            metadata: serde_json::json!({"region_hq": "USA (OR)"}),
            contact_info: serde_json::json!({"email": "sales@pacificdomes.com"}),
            created_at: chrono::Utc::now().naive_utc(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .append_query_results([vec![stored.clone()], vec![stored]])
            .into_connection();

        let data: VendorData = serde_json::from_str(
            r#"{
                "partner_name": "Pacific Domes",
                "website_url": "https://pacificdomes.com",
                "affiliate_link": "https://pacificdomes.com/?ref=terralux",
                "is_certified": true,
                "consultation_enabled": true,
                "coordinates": "45.5152,-122.6784",
                "primary_category": "DOMES",
                "heal_alignment": "MEDIUM",
                "status": "ACTIVE",
                "metadata": {"region_hq": "USA (OR)"},
                "contact_info": {"email": "sales@pacificdomes.com"}
            }"#,
        )
        .unwrap();

        let created = create(&db, data.clone()).await.unwrap();
        let fetched = find_by_id(&db, created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.partner_name, data.partner_name);
        assert_eq!(fetched.website_url, data.website_url);
        assert_eq!(fetched.affiliate_link, data.affiliate_link);
        assert_eq!(fetched.is_certified, data.is_certified);
        assert_eq!(fetched.consultation_enabled, data.consultation_enabled);
        assert_eq!(fetched.coordinates, data.coordinates);
        assert_eq!(fetched.primary_category, data.primary_category);
        assert_eq!(fetched.heal_alignment, data.heal_alignment);
        assert_eq!(fetched.status, data.status);
        assert_eq!(fetched.metadata, data.metadata);
        assert_eq!(fetched.contact_info, data.contact_info);

        // the insert statement itself carried the supplied values
        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("Pacific Domes"));
        assert!(log.contains("DOMES"));
    }

    #[tokio::test]
    async fn test_update_missing_vendor_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<vendor::Model>::new()])
            .into_connection();

        let data: VendorData = serde_json::from_str(
            r#"{"partner_name": "Ghost", "primary_category": "PREFAB"}"#,
        )
        .unwrap();
        let err = update(&db, 404, data).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TerraluxError>(),
            Some(TerraluxError::VendorNotFound(404))
        ));
    }
}
