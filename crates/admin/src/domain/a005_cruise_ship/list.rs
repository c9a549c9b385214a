use contracts::domain::a005_cruise_ship::CruiseShip;
use contracts::shared::stats::{StatValue, ValueFormat};

use crate::shared::filter_state::Dimension;
use crate::shared::format::or_dash;
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::{average_of, count_where, distinct_count, round_to};

fn cruise_line(s: &CruiseShip) -> Option<String> {
    s.cruise_line_name
        .clone()
        .or_else(|| Some(s.cruise_line.as_string()))
}

static DIMENSIONS: [Dimension<CruiseShip>; 1] = [Dimension {
    key: "cruise_line",
    label: "Cruise line",
    extract: cruise_line,
}];

pub struct CruiseShipList;

impl ListResource for CruiseShipList {
    type Entity = CruiseShip;

    const KEY: &'static str = "cruise-ships";
    const LOAD_ERROR: &'static str = "Failed to load ships";
    const ROUTE: &'static str = "/travel-products/cruises/cruise-ships";

    fn dimensions() -> &'static [Dimension<CruiseShip>] {
        &DIMENSIONS
    }

    fn statistics(items: &[CruiseShip], total_count: usize) -> Vec<StatValue> {
        let avg_capacity =
            average_of(items, |s| s.capacity.map(f64::from)).map(|c| round_to(c, 1));
        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer(
                "with_capacity",
                "With capacity",
                count_where(items, |s| s.capacity.is_some()),
            ),
            StatValue::new(
                "avg_capacity",
                "Average capacity",
                avg_capacity,
                ValueFormat::Number { decimals: 1 },
            ),
            StatValue::integer(
                "cruise_lines",
                "Cruise lines",
                distinct_count(items, cruise_line),
            ),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Cruise line", "Capacity", "Built"]
    }

    fn row(s: &CruiseShip) -> Vec<String> {
        vec![
            s.name.clone(),
            or_dash(s.cruise_line_name.as_deref()),
            or_dash(s.capacity),
            or_dash(s.year_built),
        ]
    }
}
