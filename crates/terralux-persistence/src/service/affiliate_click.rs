//! Affiliate click tracking

use anyhow::Context;
use sea_orm::*;

use crate::entity::affiliate_click;

/// Record a click-through on a vendor's affiliate link.
///
/// Anonymous clicks carry no user id; `converted` starts false and is
/// flipped by downstream reconciliation, not by this service.
pub async fn track(
    db: &DatabaseConnection,
    vendor_id: i64,
    user_id: Option<i64>,
) -> anyhow::Result<affiliate_click::Model> {
    let entity = affiliate_click::ActiveModel {
        vendor_id: Set(vendor_id),
        user_id: Set(user_id),
        timestamp: Set(chrono::Utc::now().naive_utc()),
        converted: Set(false),
        ..Default::default()
    };

    entity
        .insert(db)
        .await
        .with_context(|| format!("failed to track click for vendor {}", vendor_id))
}
