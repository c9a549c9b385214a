use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceId};

/// Прокатная компания
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRentalCompany {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,

    // Счетчики вычисляются сериализатором
    #[serde(default)]
    pub locations_count: Option<u32>,
    #[serde(default)]
    pub cars_count: Option<u32>,

    pub created_at: DateTime<Utc>,
}

impl CarRentalCompany {
    pub fn has_logo(&self) -> bool {
        self.logo_url
            .as_deref()
            .map(|u| !u.trim().is_empty())
            .unwrap_or(false)
    }
}

impl ApiResource for CarRentalCompany {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "car_rental_company"
    }

    fn endpoint() -> &'static str {
        "/api/car-rentals/companies/"
    }

    fn element_name() -> &'static str {
        "Rental company"
    }

    fn list_name() -> &'static str {
        "Rental companies"
    }
}
