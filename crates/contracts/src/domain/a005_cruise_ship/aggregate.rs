use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceId};

/// Круизный лайнер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CruiseShip {
    pub id: ResourceId,
    pub cruise_line: ResourceId,
    #[serde(default)]
    pub cruise_line_name: Option<String>,
    pub name: String,
    /// Вместимость в пассажирах
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub year_built: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl ApiResource for CruiseShip {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "cruise_ship"
    }

    fn endpoint() -> &'static str {
        "/api/cruises/ships/"
    }

    fn element_name() -> &'static str {
        "Cruise ship"
    }

    fn list_name() -> &'static str {
        "Cruise ships"
    }
}
