use contracts::domain::a008_airline::Airline;
use contracts::shared::stats::StatValue;

use crate::shared::filter_state::Dimension;
use crate::shared::format::{or_dash, percent_hint};
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::{count_where, distinct_count, percent_of};

fn country(a: &Airline) -> Option<String> {
    a.country.clone()
}

static DIMENSIONS: [Dimension<Airline>; 1] = [Dimension {
    key: "country",
    label: "Country",
    extract: country,
}];

pub struct AirlineList;

impl ListResource for AirlineList {
    type Entity = Airline;

    const KEY: &'static str = "airlines";
    const LOAD_ERROR: &'static str = "Failed to load airlines";
    const ROUTE: &'static str = "/travel-products/flights/airlines";

    fn dimensions() -> &'static [Dimension<Airline>] {
        &DIMENSIONS
    }

    fn statistics(items: &[Airline], total_count: usize) -> Vec<StatValue> {
        let with_logos = count_where(items, |a| a.has_logo());
        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer("with_logos", "With logos", with_logos)
                .with_hint(percent_hint(percent_of(with_logos, items.len()))),
            StatValue::integer(
                "countries",
                "Countries",
                distinct_count(items, country),
            ),
            StatValue::integer(
                "with_flights",
                "With flights",
                count_where(items, |a| a.flights_count.unwrap_or(0) > 0),
            ),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Code", "Name", "Country", "Flights"]
    }

    fn row(a: &Airline) -> Vec<String> {
        vec![
            a.code.clone(),
            a.name.clone(),
            or_dash(a.country.as_deref()),
            a.flights_count.unwrap_or(0).to_string(),
        ]
    }
}
