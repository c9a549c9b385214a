use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{deserialize_decimal_opt, ApiResource, ResourceId};

// ============================================================================
// Enums
// ============================================================================

/// Статус объекта размещения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Active,
    Inactive,
    Pending,
    Suspended,
}

impl PropertyStatus {
    /// Значение в API
    pub fn code(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "active",
            PropertyStatus::Inactive => "inactive",
            PropertyStatus::Pending => "pending",
            PropertyStatus::Suspended => "suspended",
        }
    }

    /// Человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "Active",
            PropertyStatus::Inactive => "Inactive",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Suspended => "Suspended",
        }
    }

    pub fn all() -> Vec<PropertyStatus> {
        vec![
            PropertyStatus::Active,
            PropertyStatus::Inactive,
            PropertyStatus::Pending,
            PropertyStatus::Suspended,
        ]
    }
}

// ============================================================================
// Record
// ============================================================================

/// Объект размещения (отель, апартаменты, вилла...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: ResourceId,
    pub name: String,

    #[serde(default)]
    pub property_type: Option<ResourceId>,
    #[serde(default)]
    pub property_type_name: Option<String>,

    #[serde(default)]
    pub property_category: Option<ResourceId>,
    #[serde(default)]
    pub property_category_name: Option<String>,

    #[serde(default)]
    pub address: Option<ResourceId>,

    /// Рейтинг 0..5, приходит как decimal-строка
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: u32,

    pub status: PropertyStatus,

    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,

    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApiResource for Property {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "property"
    }

    fn endpoint() -> &'static str {
        "/api/accommodations/properties/"
    }

    fn element_name() -> &'static str {
        "Property"
    }

    fn list_name() -> &'static str {
        "Accommodations"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_decodes_api_payload() {
        let json = r#"{
            "id": "0b7f61c4-34a4-4a57-b0f0-3f4a9d7a1e11",
            "name": "Hotel du Louvre",
            "property_type": "5e8e4a10-0f43-4f39-9d9c-5d3c2bb1a001",
            "property_type_name": "Hotel",
            "property_category": null,
            "rating": "4.50",
            "total_reviews": 120,
            "status": "active",
            "check_in_time": "15:00:00",
            "check_out_time": "11:00:00",
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-02T10:00:00Z"
        }"#;

        let p: Property = serde_json::from_str(json).unwrap();
        assert_eq!(p.status, PropertyStatus::Active);
        assert_eq!(p.rating, Some(4.5));
        assert!(p.property_category.is_none());
        assert_eq!(p.property_type_name.as_deref(), Some("Hotel"));
        assert_eq!(Property::full_name(), "a001_property");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{
            "id": "0b7f61c4-34a4-4a57-b0f0-3f4a9d7a1e11",
            "name": "X",
            "status": "archived",
            "created_at": "2025-03-01T10:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Property>(json).is_err());
    }
}
