use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    Cancelled,
    Completed,
}

impl FlightStatus {
    pub fn code(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "scheduled",
            FlightStatus::Delayed => "delayed",
            FlightStatus::Cancelled => "cancelled",
            FlightStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Completed => "Completed",
        }
    }
}

/// Рейс (строка списка FlightListSerializer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: ResourceId,
    pub flight_number: String,

    pub airline: ResourceId,
    #[serde(default)]
    pub airline_code: Option<String>,
    #[serde(default)]
    pub airline_name: Option<String>,

    pub departure_airport: ResourceId,
    #[serde(default)]
    pub departure_airport_code: Option<String>,
    #[serde(default)]
    pub departure_city: Option<String>,

    pub arrival_airport: ResourceId,
    #[serde(default)]
    pub arrival_airport_code: Option<String>,
    #[serde(default)]
    pub arrival_city: Option<String>,

    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub aircraft_type: Option<String>,

    /// Есть не во всех сериализаторах
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,

    pub status: FlightStatus,

    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Flight {
    /// Дата, по которой рейс считается "сегодняшним":
    /// время вылета, а если его нет, дата создания записи
    pub fn reference_date(&self) -> NaiveDate {
        self.departure_time
            .unwrap_or(self.created_at)
            .date_naive()
    }

    /// "CDG → JFK"
    pub fn route(&self) -> String {
        format!(
            "{} → {}",
            self.departure_airport_code.as_deref().unwrap_or("?"),
            self.arrival_airport_code.as_deref().unwrap_or("?")
        )
    }
}

impl ApiResource for Flight {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.flight_number.clone()
    }

    fn resource_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "flight"
    }

    fn endpoint() -> &'static str {
        "/api/flights/flights/"
    }

    fn element_name() -> &'static str {
        "Flight"
    }

    fn list_name() -> &'static str {
        "Flights"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(departure_time: Option<&str>) -> Flight {
        let departure = match departure_time {
            Some(t) => format!("\"{}\"", t),
            None => "null".to_string(),
        };
        let json = format!(
            r#"{{
                "id": "c0d4f1d3-7f7c-4b3d-9fb2-1a0d5a4a2b01",
                "flight_number": "AF1234",
                "airline": "c0d4f1d3-7f7c-4b3d-9fb2-1a0d5a4a2b02",
                "departure_airport": "c0d4f1d3-7f7c-4b3d-9fb2-1a0d5a4a2b03",
                "departure_airport_code": "CDG",
                "arrival_airport": "c0d4f1d3-7f7c-4b3d-9fb2-1a0d5a4a2b04",
                "arrival_airport_code": "JFK",
                "departure_time": {},
                "status": "delayed",
                "created_at": "2025-05-01T09:30:00Z"
            }}"#,
            departure
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_reference_date_prefers_departure_time() {
        let f = flight(Some("2025-06-15T22:10:00Z"));
        assert_eq!(f.reference_date(), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());

        let f = flight(None);
        assert_eq!(f.reference_date(), NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(f.route(), "CDG → JFK");
        assert_eq!(f.status, FlightStatus::Delayed);
    }
}
