use contracts::domain::a009_airport::Airport;
use contracts::shared::stats::StatValue;

use crate::shared::filter_state::Dimension;
use crate::shared::format::or_dash;
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::{count_where, sum_of};

fn country(a: &Airport) -> Option<String> {
    a.country.clone()
}

fn city(a: &Airport) -> Option<String> {
    a.city.clone()
}

static DIMENSIONS: [Dimension<Airport>; 2] = [
    Dimension {
        key: "country",
        label: "Country",
        extract: country,
    },
    Dimension {
        key: "city",
        label: "City",
        extract: city,
    },
];

pub struct AirportList;

impl ListResource for AirportList {
    type Entity = Airport;

    const KEY: &'static str = "airports";
    const LOAD_ERROR: &'static str = "Failed to load airports";
    const ROUTE: &'static str = "/travel-products/flights/airports";

    fn dimensions() -> &'static [Dimension<Airport>] {
        &DIMENSIONS
    }

    /// Каждый рейс учитывается и в вылетах, и в прилетах, поэтому сумма делится пополам
    fn statistics(items: &[Airport], total_count: usize) -> Vec<StatValue> {
        let movements = sum_of(items, |a| {
            Some(f64::from(
                a.departure_flights_count.unwrap_or(0) + a.arrival_flights_count.unwrap_or(0),
            ))
        });
        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer(
                "with_coordinates",
                "With coordinates",
                count_where(items, |a| a.has_coordinates()),
            ),
            StatValue::integer(
                "with_timezone",
                "With timezone",
                count_where(items, |a| a.has_timezone()),
            ),
            StatValue::integer("flights", "Total flights", (movements / 2.0).round() as usize),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["IATA", "Name", "City", "Country", "Timezone"]
    }

    fn row(a: &Airport) -> Vec<String> {
        vec![
            a.iata_code.clone(),
            a.name.clone(),
            or_dash(a.city.as_deref()),
            or_dash(a.country.as_deref()),
            or_dash(a.timezone.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::FilterState;
    use contracts::domain::common::ResourceId;

    fn airport(iata: &str, city: &str, dep: u32, arr: u32) -> Airport {
        Airport {
            id: ResourceId::new_v4(),
            iata_code: iata.to_string(),
            icao_code: None,
            name: iata.to_string(),
            city: Some(city.to_string()),
            country: Some("France".to_string()),
            latitude: Some(49.0),
            longitude: Some(2.5),
            timezone: None,
            departure_flights_count: Some(dep),
            arrival_flights_count: Some(arr),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_airport_statistics() {
        let items = vec![airport("CDG", "Paris", 3, 2), airport("NCE", "Nice", 1, 1)];
        let stats = AirportList::statistics(&items, 2);
        assert_eq!(stats[1].value, Some(2.0));
        assert_eq!(stats[2].value, Some(0.0));
        // (5 + 2) / 2 = 3.5 -> 4
        assert_eq!(stats[3].value, Some(4.0));

        let mut filters = FilterState::new(AirportList::dimensions());
        assert_eq!(
            filters.options(&items, "city").unwrap(),
            vec!["Nice".to_string(), "Paris".to_string()]
        );
        filters.set_filter("city", "Paris").unwrap();
        assert_eq!(filters.apply(&items).len(), 1);
    }
}
