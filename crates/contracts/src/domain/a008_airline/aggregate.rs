use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceId};

/// Авиакомпания
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub id: ResourceId,
    /// IATA код (AF, LH...)
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub flights_count: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl Airline {
    pub fn has_logo(&self) -> bool {
        self.logo_url
            .as_deref()
            .map(|u| !u.trim().is_empty())
            .unwrap_or(false)
    }
}

impl ApiResource for Airline {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }

    fn resource_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "airline"
    }

    fn endpoint() -> &'static str {
        "/api/flights/airlines/"
    }

    fn element_name() -> &'static str {
        "Airline"
    }

    fn list_name() -> &'static str {
        "Airlines"
    }
}
