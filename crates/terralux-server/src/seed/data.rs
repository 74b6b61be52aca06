//! Fixed seed dataset: the TerraLux vendor roster and research-backed
//! model listings for the vendors that have them.

use serde_json::json;

use terralux_persistence::entity::enums::{HealAlignment, VendorCategory, VendorStatus};
use terralux_persistence::service::{building_model::ModelData, vendor::VendorData};

pub struct SeedVendor {
    pub partner_name: &'static str,
    pub status: VendorStatus,
    pub primary_category: VendorCategory,
    pub website_url: &'static str,
    pub affiliate_link: Option<&'static str>,
    pub heal_alignment: HealAlignment,
    pub is_certified: bool,
    pub consultation_enabled: bool,
    pub coordinates: Option<&'static str>,
    pub specialty_focus: &'static str,
    pub region_hq: &'static str,
    pub notes: Option<&'static str>,
}

impl SeedVendor {
    pub fn to_vendor_data(&self) -> VendorData {
        let mut metadata = serde_json::Map::new();
        metadata.insert("specialty_focus".to_string(), json!(self.specialty_focus));
        metadata.insert("region_hq".to_string(), json!(self.region_hq));
        if let Some(notes) = self.notes {
            metadata.insert("notes".to_string(), json!(notes));
        }

        VendorData {
            partner_name: self.partner_name.to_string(),
            website_url: Some(self.website_url.to_string()),
            affiliate_link: self.affiliate_link.map(str::to_string),
            is_certified: self.is_certified,
            consultation_enabled: self.consultation_enabled,
            coordinates: self.coordinates.map(str::to_string),
            primary_category: self.primary_category,
            heal_alignment: self.heal_alignment,
            status: self.status,
            metadata: serde_json::Value::Object(metadata),
            contact_info: json!({}),
        }
    }
}

pub struct SeedModel {
    pub vendor: &'static str,
    pub model_name: &'static str,
    pub description: &'static str,
    pub price_range: &'static str,
    pub specifications: &'static [(&'static str, &'static str)],
    pub is_featured: bool,
}

impl SeedModel {
    pub fn to_model_data(&self, vendor_id: i64) -> ModelData {
        let specifications: serde_json::Map<String, serde_json::Value> = self
            .specifications
            .iter()
            .map(|(key, value)| (key.to_string(), json!(value)))
            .collect();

        ModelData {
            vendor_id,
            model_name: self.model_name.to_string(),
            description: self.description.to_string(),
            price_range: self.price_range.to_string(),
            specifications: serde_json::Value::Object(specifications),
            images: json!([]),
            is_featured: self.is_featured,
            glb_file: None,
            relationship_type: "Manufacturer".to_string(),
        }
    }
}

/// Models with research-backed data for `partner_name`.
pub fn models_for(partner_name: &str) -> impl Iterator<Item = &'static SeedModel> {
    MODELS.iter().filter(move |m| m.vendor == partner_name)
}

pub const VENDORS: &[SeedVendor] = &[
    SeedVendor {
        partner_name: "Terra Lux Domes",
        status: VendorStatus::CoreCouncil,
        primary_category: VendorCategory::Domes,
        website_url: "https://terra-lux.org",
        affiliate_link: None,
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("37.7749,-122.4194"),
        specialty_focus: "Form & Structure; Engineered geodesic panels for rapid assembly",
        region_hq: "USA",
        notes: Some("Proprietary. Designed to integrate with Issho Homes systems"),
    },
    SeedVendor {
        partner_name: "Pacific Domes",
        status: VendorStatus::Active,
        primary_category: VendorCategory::Domes,
        website_url: "https://pacificdomes.com",
        affiliate_link: Some("https://pacificdomes.com/?ref=terralux"),
        heal_alignment: HealAlignment::Medium,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("45.5152,-122.6784"),
        specialty_focus: "Geodesic domes for homes, eco-villages, and events",
        region_hq: "USA (OR)",
        notes: None,
    },
    SeedVendor {
        partner_name: "ICON Technology Inc.",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::ThreeDPrint,
        website_url: "https://iconbuild.com",
        affiliate_link: Some("https://iconbuild.com/?ref=terralux"),
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("30.2672,-97.7431"),
        specialty_focus: "Market Leader in 3D-printed homes, robotics, and advanced materials",
        region_hq: "USA (TX)",
        notes: Some("Futuristic build method. Aligned with Lennar (Veev)"),
    },
    SeedVendor {
        partner_name: "Phoenix Haus",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Prefab,
        website_url: "https://phoenixhaus.com",
        affiliate_link: Some("https://phoenixhaus.com/?ref=terralux"),
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("39.7392,-104.9903"),
        specialty_focus: "Nontoxic, wood-based, Passive-House certified modular systems",
        region_hq: "USA (CO)",
        notes: Some("Directly aligns with nontoxic and ultra-healthy interior systems"),
    },
    SeedVendor {
        partner_name: "Plant Prefab",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Prefab,
        website_url: "https://plantprefab.com",
        affiliate_link: Some("https://plantprefab.com/?ref=terralux"),
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("34.0522,-118.2437"),
        specialty_focus: "LEED + WELL Certified modular homes. Wellness-focused",
        region_hq: "USA (CA)",
        notes: Some("WELL certification is a direct Homes that Heal alignment"),
    },
    SeedVendor {
        partner_name: "ÖÖD House",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Prefab,
        website_url: "https://oodhouse.com",
        affiliate_link: Some("https://oodhouse.com/?ref=terralux"),
        heal_alignment: HealAlignment::Medium,
        is_certified: false,
        consultation_enabled: true,
        coordinates: Some("59.4370,24.7536"),
        specialty_focus: "Luxury prefab mirror-glass modules. High-end showpiece",
        region_hq: "Estonia / Global",
        notes: None,
    },
    SeedVendor {
        partner_name: "Cob Cottage Company",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Natural,
        website_url: "https://cobcottage.com",
        affiliate_link: None,
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: false,
        coordinates: Some("44.0521,-123.0868"),
        specialty_focus: "Founders of modern cob revival. Ideal for education/workshops",
        region_hq: "USA (OR)",
        notes: Some("Inherently low-toxicity, natural, ancient method"),
    },
    SeedVendor {
        partner_name: "Earthship Biotecture",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Natural,
        website_url: "https://earthshipglobal.com",
        affiliate_link: Some("https://earthshipglobal.com/?ref=terralux"),
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("36.4072,-105.5731"),
        specialty_focus: "Recycled-material, passive thermal mass, off-grid autonomous homes",
        region_hq: "USA (NM)",
        notes: Some("Focus on autonomy, recycling, and passive systems"),
    },
    SeedVendor {
        partner_name: "Deltec Homes",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Domes,
        website_url: "https://deltechomes.com",
        affiliate_link: Some("https://deltechomes.com/?ref=terralux"),
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("35.5951,-82.5515"),
        specialty_focus: "Circular (round) prefab homes; toxin-free materials, hurricane-proof",
        region_hq: "USA (NC)",
        notes: Some("Toxin-free materials and resilience are direct Heal alignments"),
    },
    SeedVendor {
        partner_name: "Baumraum",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Tree,
        website_url: "https://baumraum.de",
        affiliate_link: Some("https://baumraum.de/?ref=terralux"),
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("53.5511,9.9937"),
        specialty_focus: "High-design, luxury tree-integrated architecture",
        region_hq: "Germany",
        notes: Some("Direct biophilic connection. Ideal for Experiential Stays"),
    },
    SeedVendor {
        partner_name: "Arkup",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Prefab,
        website_url: "https://arkup.com",
        affiliate_link: Some("https://arkup.com/?ref=terralux"),
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("25.7617,-80.1918"),
        specialty_focus: "Luxury, solar-powered, self-elevating livable yachts",
        region_hq: "USA (FL)",
        notes: Some("Futuristic, off-grid, resilient. Ideal Experiential Stay showpiece"),
    },
    SeedVendor {
        partner_name: "Method Homes",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Prefab,
        website_url: "https://methodhomes.net",
        affiliate_link: Some("https://methodhomes.net/?ref=terralux"),
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("47.6062,-122.3321"),
        specialty_focus: "Modern sustainable prefab; can build to Passive House/LBC standards",
        region_hq: "USA",
        notes: None,
    },
    SeedVendor {
        partner_name: "Huf Haus",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Prefab,
        website_url: "https://huf-haus.com",
        affiliate_link: None,
        heal_alignment: HealAlignment::Medium,
        is_certified: false,
        consultation_enabled: true,
        coordinates: Some("50.3569,7.5890"),
        specialty_focus: "High-end, customizable timber-and-glass prefab homes",
        region_hq: "Germany",
        notes: None,
    },
    SeedVendor {
        partner_name: "CORE (Climate-Oriented Real Estate)",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Prefab,
        website_url: "https://core-we-care.com",
        affiliate_link: None,
        heal_alignment: HealAlignment::High,
        is_certified: true,
        consultation_enabled: true,
        coordinates: Some("49.2827,-123.1207"),
        specialty_focus: "Sustainable/regenerative prefab with a no glues or chemicals focus",
        region_hq: "Canada (BC)",
        notes: Some("Healthy Low-Tech High-Performance Buildings. Perfect mission alignment"),
    },
    SeedVendor {
        partner_name: "Monolithic Dome Institute",
        status: VendorStatus::Priority,
        primary_category: VendorCategory::Domes,
        website_url: "https://monolithic.com",
        affiliate_link: None,
        heal_alignment: HealAlignment::Medium,
        is_certified: false,
        consultation_enabled: true,
        coordinates: Some("32.3513,-95.3011"),
        specialty_focus: "Reinforced concrete domes; highly durable, efficient, and resilient",
        region_hq: "USA (TX)",
        notes: None,
    },
];

pub const MODELS: &[SeedModel] = &[
    SeedModel {
        vendor: "Pacific Domes",
        model_name: "24ft Geodesic Dome",
        description: "A versatile 24-foot diameter geodesic dome perfect for eco-villages, \
                      glamping sites, and off-grid living. Features sustainable timber framing \
                      and can be customized with various covering options.",
        price_range: "$15k-$25k",
        specifications: &[
            ("diameter", "24 feet"),
            ("floor_area", "452 sq ft"),
            ("height", "12 feet"),
            ("capacity", "2-4 people"),
            ("materials", "Douglas fir timber frame"),
            ("covering_options", "Canvas, vinyl, or insulated panels"),
        ],
        is_featured: true,
    },
    SeedModel {
        vendor: "Pacific Domes",
        model_name: "30ft Geodesic Dome",
        description: "Spacious 30-foot geodesic dome ideal for permanent residences or retreat \
                      centers. Offers excellent structural integrity and energy efficiency with \
                      its spherical design.",
        price_range: "$25k-$40k",
        specifications: &[
            ("diameter", "30 feet"),
            ("floor_area", "707 sq ft"),
            ("height", "15 feet"),
            ("capacity", "4-6 people"),
            ("materials", "Engineered timber frame"),
            ("insulation", "R-30 available"),
        ],
        is_featured: false,
    },
    SeedModel {
        vendor: "Pacific Domes",
        model_name: "Event Dome 40ft",
        description: "Large-scale event dome perfect for weddings, festivals, and community \
                      gatherings. Quick assembly and stunning visual impact.",
        price_range: "$40k-$60k",
        specifications: &[
            ("diameter", "40 feet"),
            ("floor_area", "1,257 sq ft"),
            ("height", "20 feet"),
            ("capacity", "50-100 people"),
            ("setup_time", "2-3 days"),
            ("materials", "Heavy-duty aluminum frame"),
        ],
        is_featured: false,
    },
    SeedModel {
        vendor: "ICON Technology Inc.",
        model_name: "House Zero",
        description: "ICON's flagship 3D-printed home featuring advanced robotics and \
                      sustainable materials. Zero-energy ready with integrated solar and \
                      battery systems.",
        price_range: "$200k-$300k",
        specifications: &[
            ("size", "1,500-2,000 sq ft"),
            ("bedrooms", "2-3"),
            ("bathrooms", "2"),
            ("construction_time", "5-7 days print time"),
            ("materials", "Lavacrete (proprietary concrete mix)"),
            ("energy", "Net-zero ready"),
        ],
        is_featured: true,
    },
    SeedModel {
        vendor: "ICON Technology Inc.",
        model_name: "Community Print",
        description: "Affordable 3D-printed home designed for community-scale developments. \
                      Optimized for rapid deployment and cost efficiency.",
        price_range: "$99k-$150k",
        specifications: &[
            ("size", "800-1,200 sq ft"),
            ("bedrooms", "2"),
            ("bathrooms", "1-2"),
            ("construction_time", "24 hours print time"),
            ("materials", "Lavacrete"),
            ("warranty", "50+ year structural"),
        ],
        is_featured: false,
    },
    SeedModel {
        vendor: "Phoenix Haus",
        model_name: "Passive House Studio",
        description: "Ultra-efficient studio ADU built to Passive House standards. Features \
                      non-toxic materials and exceptional air quality systems.",
        price_range: "$150k-$200k",
        specifications: &[
            ("size", "600 sq ft"),
            ("bedrooms", "Studio"),
            ("bathrooms", "1"),
            ("energy_use", "90% less than code"),
            ("materials", "FSC-certified wood, zero-VOC finishes"),
            ("ventilation", "ERV with HEPA filtration"),
        ],
        is_featured: true,
    },
    SeedModel {
        vendor: "Phoenix Haus",
        model_name: "Family Home 1800",
        description: "Spacious Passive House certified family home with open floor plan and \
                      abundant natural light. Nontoxic throughout.",
        price_range: "$400k-$550k",
        specifications: &[
            ("size", "1,800 sq ft"),
            ("bedrooms", "3"),
            ("bathrooms", "2.5"),
            ("energy_use", "85% less than code"),
            ("materials", "Solid wood construction, natural finishes"),
            ("certification", "Passive House Institute US"),
        ],
        is_featured: false,
    },
    SeedModel {
        vendor: "Plant Prefab",
        model_name: "LivingHome 1",
        description: "LEED Platinum and WELL Certified prefab home with focus on wellness and \
                      sustainability. Features circadian lighting and advanced air filtration.",
        price_range: "$350k-$500k",
        specifications: &[
            ("size", "1,200 sq ft"),
            ("bedrooms", "2"),
            ("bathrooms", "2"),
            ("certifications", "LEED Platinum, WELL Gold"),
            ("materials", "Low-VOC, sustainable sourced"),
            ("features", "Circadian lighting, HEPA filtration"),
        ],
        is_featured: true,
    },
    SeedModel {
        vendor: "Plant Prefab",
        model_name: "Accessory Dwelling Unit",
        description: "Compact ADU perfect for multigenerational living or rental income. LEED \
                      certified with wellness features.",
        price_range: "$200k-$280k",
        specifications: &[
            ("size", "640 sq ft"),
            ("bedrooms", "1"),
            ("bathrooms", "1"),
            ("construction_time", "6-8 weeks"),
            ("certifications", "LEED Gold"),
            ("energy", "All-electric, solar-ready"),
        ],
        is_featured: false,
    },
    SeedModel {
        vendor: "ÖÖD House",
        model_name: "ÖÖD 1",
        description: "Iconic mirror-glass prefab module. Minimalist luxury with stunning \
                      reflective exterior that blends with nature.",
        price_range: "$120k-$180k",
        specifications: &[
            ("size", "290 sq ft"),
            ("bedrooms", "Studio"),
            ("bathrooms", "1"),
            ("delivery_time", "8-12 weeks"),
            ("materials", "Mirror glass exterior, wood interior"),
            ("mobility", "Relocatable on trailer"),
        ],
        is_featured: true,
    },
    SeedModel {
        vendor: "ÖÖD House",
        model_name: "ÖÖD 2",
        description: "Expanded two-module configuration offering more space while maintaining \
                      the signature mirror aesthetic.",
        price_range: "$200k-$280k",
        specifications: &[
            ("size", "580 sq ft"),
            ("bedrooms", "1"),
            ("bathrooms", "1"),
            ("configuration", "Two connected modules"),
            ("materials", "Mirror glass, premium wood"),
            ("features", "Smart home integration"),
        ],
        is_featured: false,
    },
    SeedModel {
        vendor: "Terra Lux Domes",
        model_name: "Engineered Geodesic Panel System",
        description: "Proprietary engineered panel system for rapid geodesic dome assembly. \
                      Designed to integrate seamlessly with Issho Homes wellness systems.",
        price_range: "$30k-$50k",
        specifications: &[
            ("diameter", "20-30 feet"),
            ("panel_type", "Engineered composite"),
            ("assembly_time", "2-4 days"),
            ("integration", "Issho Homes compatible"),
            ("insulation", "R-40 panels available"),
            ("warranty", "25 years structural"),
        ],
        is_featured: true,
    },
    SeedModel {
        vendor: "Earthship Biotecture",
        model_name: "Global Model Earthship",
        description: "The classic Earthship design featuring recycled tire walls, passive solar \
                      heating/cooling, and complete off-grid systems.",
        price_range: "$250k-$400k",
        specifications: &[
            ("size", "1,500-2,500 sq ft"),
            ("bedrooms", "2-3"),
            ("bathrooms", "2"),
            ("walls", "Rammed earth tires"),
            ("systems", "Rainwater, greywater, solar, food production"),
            ("climate", "Works in any climate"),
        ],
        is_featured: true,
    },
    SeedModel {
        vendor: "Earthship Biotecture",
        model_name: "Simple Survival Model",
        description: "Streamlined Earthship design for those seeking essential off-grid living \
                      at a lower price point.",
        price_range: "$100k-$180k",
        specifications: &[
            ("size", "800-1,200 sq ft"),
            ("bedrooms", "1-2"),
            ("bathrooms", "1"),
            ("walls", "Rammed earth tires"),
            ("systems", "Basic off-grid package"),
            ("ideal_for", "Single person or couple"),
        ],
        is_featured: false,
    },
    SeedModel {
        vendor: "Deltec Homes",
        model_name: "Renew Series 1200",
        description: "Circular prefab home with toxin-free materials and hurricane-resistant \
                      design. Net-zero energy capable.",
        price_range: "$280k-$380k",
        specifications: &[
            ("size", "1,200 sq ft"),
            ("bedrooms", "2"),
            ("bathrooms", "2"),
            ("shape", "Circular (round)"),
            ("wind_rating", "Category 5 hurricane"),
            ("materials", "Toxin-free, sustainable"),
            ("energy", "Net-zero ready"),
        ],
        is_featured: true,
    },
    SeedModel {
        vendor: "Baumraum",
        model_name: "Djuren Treehouse",
        description: "Luxury treehouse with panoramic windows and suspended design. Perfect \
                      integration with forest canopy.",
        price_range: "$180k-$280k",
        specifications: &[
            ("size", "400-600 sq ft"),
            ("bedrooms", "1"),
            ("bathrooms", "1"),
            ("elevation", "10-25 feet"),
            ("materials", "Sustainable timber, large-format glass"),
            ("features", "Heated floors, full kitchen"),
        ],
        is_featured: true,
    },
    SeedModel {
        vendor: "Arkup",
        model_name: "Arkup 75",
        description: "Luxury floating villa with solar power, rainwater collection, and \
                      hydraulic stilts for stability. The ultimate in waterfront living.",
        price_range: "$5.5M-$7M",
        specifications: &[
            ("size", "4,350 sq ft"),
            ("bedrooms", "4"),
            ("bathrooms", "4.5"),
            ("power", "Solar + battery (off-grid capable)"),
            ("water", "Rainwater + desalination"),
            ("mobility", "Self-propelled, relocatable"),
            ("features", "Hydraulic stilts, rooftop terrace"),
        ],
        is_featured: true,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use terralux_common::slugify;

    use super::*;

    #[test]
    fn test_vendor_roster_shape() {
        assert_eq!(VENDORS.len(), 15);
        let names: HashSet<&str> = VENDORS.iter().map(|v| v.partner_name).collect();
        assert_eq!(names.len(), VENDORS.len());
    }

    #[test]
    fn test_every_model_belongs_to_a_known_vendor() {
        let names: HashSet<&str> = VENDORS.iter().map(|v| v.partner_name).collect();
        for model in MODELS {
            assert!(names.contains(model.vendor), "orphan model: {}", model.model_name);
        }
    }

    #[test]
    fn test_seed_slugs_are_unique() {
        let slugs: HashSet<String> = MODELS.iter().map(|m| slugify(m.model_name)).collect();
        assert_eq!(slugs.len(), MODELS.len());
    }

    #[test]
    fn test_models_for_filters_by_vendor() {
        assert_eq!(models_for("Pacific Domes").count(), 3);
        assert_eq!(models_for("Monolithic Dome Institute").count(), 0);
    }

    #[test]
    fn test_vendor_data_conversion_carries_metadata() {
        let data = VENDORS[0].to_vendor_data();
        assert_eq!(data.partner_name, "Terra Lux Domes");
        assert_eq!(data.metadata["region_hq"], "USA");
        assert!(data.metadata["notes"].as_str().unwrap().contains("Issho"));
    }

    #[test]
    fn test_model_data_conversion_builds_spec_map() {
        let dome = MODELS
            .iter()
            .find(|m| m.model_name == "24ft Geodesic Dome")
            .unwrap();
        let data = dome.to_model_data(5);
        assert_eq!(data.vendor_id, 5);
        assert_eq!(data.specifications["diameter"], "24 feet");
        assert!(data.is_featured);
    }
}
