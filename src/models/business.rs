// ABOUTME: Business record model and the fixed category taxonomy shared by
// the directory dataset and the listing wizard

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed category taxonomy. The wizard's category picker and the directory
/// dataset must agree on this list, so both go through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    FoodAndCatering,
    FashionAndBeauty,
    HealthAndWellness,
    TechAndGadgets,
    HomeAndCleaning,
    EventsAndEntertainment,
    LogisticsAndTransport,
    EducationAndTraining,
    ProfessionalServices,
    ArtsAndCrafts,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Self::FoodAndCatering,
            Self::FashionAndBeauty,
            Self::HealthAndWellness,
            Self::TechAndGadgets,
            Self::HomeAndCleaning,
            Self::EventsAndEntertainment,
            Self::LogisticsAndTransport,
            Self::EducationAndTraining,
            Self::ProfessionalServices,
            Self::ArtsAndCrafts,
        ]
    }

    /// Wire/slug form used in the dataset and the completion handoff
    pub fn slug(&self) -> &'static str {
        match self {
            Self::FoodAndCatering => "food-and-catering",
            Self::FashionAndBeauty => "fashion-and-beauty",
            Self::HealthAndWellness => "health-and-wellness",
            Self::TechAndGadgets => "tech-and-gadgets",
            Self::HomeAndCleaning => "home-and-cleaning",
            Self::EventsAndEntertainment => "events-and-entertainment",
            Self::LogisticsAndTransport => "logistics-and-transport",
            Self::EducationAndTraining => "education-and-training",
            Self::ProfessionalServices => "professional-services",
            Self::ArtsAndCrafts => "arts-and-crafts",
        }
    }

    /// Human-readable label for list pickers and detail views
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodAndCatering => "Food & Catering",
            Self::FashionAndBeauty => "Fashion & Beauty",
            Self::HealthAndWellness => "Health & Wellness",
            Self::TechAndGadgets => "Tech & Gadgets",
            Self::HomeAndCleaning => "Home & Cleaning",
            Self::EventsAndEntertainment => "Events & Entertainment",
            Self::LogisticsAndTransport => "Logistics & Transport",
            Self::EducationAndTraining => "Education & Training",
            Self::ProfessionalServices => "Professional Services",
            Self::ArtsAndCrafts => "Arts & Crafts",
        }
    }

    /// Parse a slug back into a category (used by CLI filters and the
    /// completion handoff decoder)
    pub fn from_slug(slug: &str) -> Option<Category> {
        Self::all().iter().copied().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One business record from the static directory dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub location: String,
    pub city: String,
    pub rating: f64,
    pub review_count: u32,
    pub verified: bool,
    pub logo_url: String,
    pub banner_url: String,
}

impl Business {
    /// Short one-line summary for list rows
    pub fn summary(&self) -> String {
        format!(
            "{} — {} · {} ({:.1}★, {} reviews)",
            self.name,
            self.category.label(),
            self.city,
            self.rating,
            self.review_count
        )
    }

    pub fn verified_badge(&self) -> &'static str {
        if self.verified { "✓ Verified" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_slug(category.slug()), Some(*category));
        }
    }

    #[test]
    fn test_category_from_unknown_slug() {
        assert_eq!(Category::from_slug("crypto-mining"), None);
        assert_eq!(Category::from_slug(""), None);
    }

    #[test]
    fn test_category_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Category::FoodAndCatering).unwrap();
        assert_eq!(json, "\"food-and-catering\"");

        let parsed: Category = serde_json::from_str("\"tech-and-gadgets\"").unwrap();
        assert_eq!(parsed, Category::TechAndGadgets);
    }

    #[test]
    fn test_business_deserializes_camel_case() {
        let json = r#"{
            "id": "biz-001",
            "name": "Ada's Kitchen",
            "category": "food-and-catering",
            "description": "Home-style Nigerian dishes",
            "location": "12 Adeola Odeku St",
            "city": "Lagos",
            "rating": 4.7,
            "reviewCount": 182,
            "verified": true,
            "logoUrl": "https://img.example/ada-logo.png",
            "bannerUrl": "https://img.example/ada-banner.png"
        }"#;

        let business: Business = serde_json::from_str(json).unwrap();
        assert_eq!(business.name, "Ada's Kitchen");
        assert_eq!(business.category, Category::FoodAndCatering);
        assert_eq!(business.review_count, 182);
        assert!(business.verified);
    }
}
