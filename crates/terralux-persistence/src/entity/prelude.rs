pub use super::affiliate_click::Entity as AffiliateClick;
pub use super::building_model::Entity as BuildingModel;
pub use super::consultation_request::Entity as ConsultationRequest;
pub use super::enums::{ConsultationStatus, HealAlignment, VendorCategory, VendorStatus};
pub use super::vendor::Entity as Vendor;
