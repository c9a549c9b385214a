use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CruiseStatus {
    Scheduled,
    Cancelled,
    Completed,
}

impl CruiseStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CruiseStatus::Scheduled => "scheduled",
            CruiseStatus::Cancelled => "cancelled",
            CruiseStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CruiseStatus::Scheduled => "Scheduled",
            CruiseStatus::Cancelled => "Cancelled",
            CruiseStatus::Completed => "Completed",
        }
    }
}

/// Круиз (маршрут конкретного лайнера на даты)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cruise {
    pub id: ResourceId,
    pub name: String,

    pub cruise_line: ResourceId,
    #[serde(default)]
    pub cruise_line_name: Option<String>,
    #[serde(default)]
    pub ship: Option<ResourceId>,
    #[serde(default)]
    pub ship_name: Option<String>,

    #[serde(default)]
    pub departure_port: Option<ResourceId>,
    #[serde(default)]
    pub arrival_port: Option<ResourceId>,

    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    pub status: CruiseStatus,

    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApiResource for Cruise {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "cruise"
    }

    fn endpoint() -> &'static str {
        "/api/cruises/cruises/"
    }

    fn element_name() -> &'static str {
        "Cruise"
    }

    fn list_name() -> &'static str {
        "Cruises"
    }
}
