use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{deserialize_decimal_opt, ApiResource, ResourceId};

/// Аэропорт
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: ResourceId,
    pub iata_code: String,
    #[serde(default)]
    pub icao_code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,

    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default)]
    pub departure_flights_count: Option<u32>,
    #[serde(default)]
    pub arrival_flights_count: Option<u32>,

    pub created_at: DateTime<Utc>,
}

impl Airport {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn has_timezone(&self) -> bool {
        self.timezone
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }
}

impl ApiResource for Airport {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.iata_code, self.name)
    }

    fn resource_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "airport"
    }

    fn endpoint() -> &'static str {
        "/api/flights/airports/"
    }

    fn element_name() -> &'static str {
        "Airport"
    }

    fn list_name() -> &'static str {
        "Airports"
    }
}
