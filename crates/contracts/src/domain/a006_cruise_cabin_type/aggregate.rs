use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceId};

/// Тип каюты (Inside, Balcony, Suite...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CruiseCabinType {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cabins_count: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl CruiseCabinType {
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false)
    }
}

impl ApiResource for CruiseCabinType {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "cruise_cabin_type"
    }

    fn endpoint() -> &'static str {
        "/api/cruises/cabin-types/"
    }

    fn element_name() -> &'static str {
        "Cabin type"
    }

    fn list_name() -> &'static str {
        "Cabin types"
    }
}
