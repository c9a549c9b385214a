use chrono::{NaiveDate, Utc};
use contracts::domain::a007_flight::{Flight, FlightStatus};
use contracts::shared::stats::StatValue;

use crate::shared::filter_state::Dimension;
use crate::shared::format::{format_datetime, or_dash};
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::count_where;

fn status(f: &Flight) -> Option<String> {
    Some(f.status.code().to_string())
}

fn airline(f: &Flight) -> Option<String> {
    f.airline_code
        .clone()
        .or_else(|| Some(f.airline.as_string()))
}

fn departure_airport(f: &Flight) -> Option<String> {
    f.departure_airport_code
        .clone()
        .or_else(|| Some(f.departure_airport.as_string()))
}

fn arrival_airport(f: &Flight) -> Option<String> {
    f.arrival_airport_code
        .clone()
        .or_else(|| Some(f.arrival_airport.as_string()))
}

static DIMENSIONS: [Dimension<Flight>; 4] = [
    Dimension {
        key: "status",
        label: "Status",
        extract: status,
    },
    Dimension {
        key: "airline",
        label: "Airline",
        extract: airline,
    },
    Dimension {
        key: "departure_airport",
        label: "From",
        extract: departure_airport,
    },
    Dimension {
        key: "arrival_airport",
        label: "To",
        extract: arrival_airport,
    },
];

/// Рейсы с датой вылета `day`
pub fn departing_on(items: &[Flight], day: NaiveDate) -> usize {
    count_where(items, |f| f.reference_date() == day)
}

pub struct FlightList;

impl ListResource for FlightList {
    type Entity = Flight;

    const KEY: &'static str = "flights";
    const LOAD_ERROR: &'static str = "Failed to load flights";
    const ROUTE: &'static str = "/travel-products/flights";

    fn dimensions() -> &'static [Dimension<Flight>] {
        &DIMENSIONS
    }

    fn statistics(items: &[Flight], total_count: usize) -> Vec<StatValue> {
        let by_status = |s: FlightStatus| count_where(items, |f| f.status == s);
        let today = Utc::now().date_naive();

        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer("scheduled", "Scheduled", by_status(FlightStatus::Scheduled)),
            StatValue::integer("delayed", "Delayed", by_status(FlightStatus::Delayed)),
            StatValue::integer("cancelled", "Cancelled", by_status(FlightStatus::Cancelled)),
            StatValue::integer("completed", "Completed", by_status(FlightStatus::Completed)),
            StatValue::integer("today", "Departing today", departing_on(items, today)),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Flight", "Airline", "Route", "Departure", "Duration", "Status"]
    }

    fn row(f: &Flight) -> Vec<String> {
        vec![
            f.flight_number.clone(),
            or_dash(f.airline_name.as_deref().or(f.airline_code.as_deref())),
            f.route(),
            or_dash(f.departure_time.as_ref().map(format_datetime)),
            or_dash(f.duration_minutes.map(|m| format!("{}h{:02}", m / 60, m % 60))),
            f.status.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::FilterState;
    use chrono::TimeZone;
    use contracts::domain::common::ResourceId;

    fn flight(number: &str, status: FlightStatus, from: &str, day: u32) -> Flight {
        Flight {
            id: ResourceId::new_v4(),
            flight_number: number.to_string(),
            airline: ResourceId::new_v4(),
            airline_code: Some("AF".to_string()),
            airline_name: Some("Air France".to_string()),
            departure_airport: ResourceId::new_v4(),
            departure_airport_code: Some(from.to_string()),
            departure_city: None,
            arrival_airport: ResourceId::new_v4(),
            arrival_airport_code: Some("JFK".to_string()),
            arrival_city: None,
            duration_minutes: Some(485),
            aircraft_type: None,
            departure_time: Some(Utc.with_ymd_and_hms(2025, 7, day, 10, 30, 0).unwrap()),
            status,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_flight_filters_and_stats() {
        let items = vec![
            flight("AF006", FlightStatus::Scheduled, "CDG", 1),
            flight("AF010", FlightStatus::Delayed, "ORY", 1),
            flight("AF022", FlightStatus::Scheduled, "CDG", 2),
        ];
        let mut filters = FilterState::new(FlightList::dimensions());
        filters.set_filter("departure_airport", "CDG").unwrap();
        filters.set_filter("status", "scheduled").unwrap();
        assert_eq!(filters.apply(&items).len(), 2);

        let stats = FlightList::statistics(&items, 3);
        assert_eq!(stats[1].value, Some(2.0));
        assert_eq!(stats[2].value, Some(1.0));
        assert_eq!(departing_on(&items, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()), 2);
    }

    #[test]
    fn test_row_formats_duration() {
        let row = FlightList::row(&flight("AF006", FlightStatus::Scheduled, "CDG", 1));
        assert_eq!(row[2], "CDG → JFK");
        assert_eq!(row[4], "8h05");
    }
}
