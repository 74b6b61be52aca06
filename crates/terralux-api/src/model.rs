//! API response shapes
//!
//! List responses for models use a reduced field set; retrieve responses
//! carry the full record with the vendor embedded.

use serde::Serialize;

use terralux_persistence::entity::{building_model, vendor};

/// Acknowledgement for a tracked affiliate click.
#[derive(Debug, Serialize)]
pub struct ClickTracked {
    pub status: &'static str,
    pub click_id: i64,
}

/// Reduced field set used by `GET /models`.
#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub id: i64,
    pub model_name: String,
    pub slug: String,
    pub vendor: i64,
    pub vendor_name: String,
    pub price_range: String,
    pub is_featured: bool,
    pub images: serde_json::Value,
}

impl ModelSummary {
    pub fn from_record(model: building_model::Model, vendor: Option<vendor::Model>) -> Self {
        Self {
            id: model.id,
            model_name: model.model_name,
            slug: model.slug,
            vendor: model.vendor_id,
            vendor_name: vendor.map(|v| v.partner_name).unwrap_or_default(),
            price_range: model.price_range,
            is_featured: model.is_featured,
            images: model.images,
        }
    }
}

/// Full record plus the embedded vendor, used by `GET /models/{id}`.
#[derive(Debug, Serialize)]
pub struct ModelDetail {
    #[serde(flatten)]
    pub model: building_model::Model,
    pub vendor_name: String,
    pub vendor_data: Option<vendor::Model>,
}

impl ModelDetail {
    pub fn from_record(model: building_model::Model, vendor: Option<vendor::Model>) -> Self {
        Self {
            vendor_name: vendor
                .as_ref()
                .map(|v| v.partner_name.clone())
                .unwrap_or_default(),
            vendor_data: vendor,
            model,
        }
    }
}

#[cfg(test)]
mod tests {
    use terralux_persistence::entity::enums::{HealAlignment, VendorCategory, VendorStatus};

    use super::*;

    fn sample_vendor() -> vendor::Model {
        vendor::Model {
            id: 5,
            partner_name: "Pacific Domes".to_string(),
            website_url: Some("https://pacificdomes.com".to_string()),
            affiliate_link: None,
            is_certified: true,
            consultation_enabled: true,
            coordinates: Some("45.5152,-122.6784".to_string()),
            primary_category: VendorCategory::Domes,
            heal_alignment: HealAlignment::Medium,
            status: VendorStatus::Active,
            metadata: serde_json::json!({}),
            contact_info: serde_json::json!({}),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    fn sample_model() -> building_model::Model {
        let now = chrono::Utc::now().naive_utc();
        building_model::Model {
            id: 9,
            vendor_id: 5,
            model_name: "24ft Geodesic Dome".to_string(),
            slug: "24ft-geodesic-dome".to_string(),
            description: "A versatile dome.".to_string(),
            price_range: "$15k-$25k".to_string(),
            specifications: serde_json::json!({"diameter": "24 feet"}),
            images: serde_json::json!(["https://cdn.terra-lux.org/domes/24.jpg"]),
            is_featured: true,
            glb_file: None,
            relationship_type: "Manufacturer".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_summary_uses_reduced_field_set() {
        let summary = ModelSummary::from_record(sample_model(), Some(sample_vendor()));
        let json = serde_json::to_value(&summary).unwrap();
        let mut keys: Vec<&str> =
            json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "id",
                "images",
                "is_featured",
                "model_name",
                "price_range",
                "slug",
                "vendor",
                "vendor_name"
            ]
        );
        assert_eq!(json["vendor"], 5);
        assert_eq!(json["vendor_name"], "Pacific Domes");
    }

    #[test]
    fn test_summary_with_missing_vendor() {
        let summary = ModelSummary::from_record(sample_model(), None);
        assert_eq!(summary.vendor_name, "");
    }

    #[test]
    fn test_detail_embeds_vendor_record() {
        let detail = ModelDetail::from_record(sample_model(), Some(sample_vendor()));
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["slug"], "24ft-geodesic-dome");
        assert_eq!(json["vendor_data"]["partner_name"], "Pacific Domes");
        assert_eq!(json["vendor_data"]["primary_category"], "DOMES");
    }
}
