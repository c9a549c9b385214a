use contracts::domain::a004_cruise::{Cruise, CruiseStatus};
use contracts::shared::stats::{StatValue, ValueFormat};

use crate::shared::filter_state::Dimension;
use crate::shared::format::{format_date, or_dash};
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::{average_of, count_where, round_to};

fn status(c: &Cruise) -> Option<String> {
    Some(c.status.code().to_string())
}

fn cruise_line(c: &Cruise) -> Option<String> {
    c.cruise_line_name
        .clone()
        .or_else(|| Some(c.cruise_line.as_string()))
}

static DIMENSIONS: [Dimension<Cruise>; 2] = [
    Dimension {
        key: "status",
        label: "Status",
        extract: status,
    },
    Dimension {
        key: "cruise_line",
        label: "Cruise line",
        extract: cruise_line,
    },
];

pub struct CruiseList;

impl ListResource for CruiseList {
    type Entity = Cruise;

    const KEY: &'static str = "cruises";
    const LOAD_ERROR: &'static str = "Failed to load cruises";
    const ROUTE: &'static str = "/travel-products/cruises";

    fn dimensions() -> &'static [Dimension<Cruise>] {
        &DIMENSIONS
    }

    fn statistics(items: &[Cruise], total_count: usize) -> Vec<StatValue> {
        let by_status = |s: CruiseStatus| count_where(items, |c| c.status == s);
        let avg_duration =
            average_of(items, |c| c.duration_days.map(f64::from)).map(|d| round_to(d, 1));

        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer("scheduled", "Scheduled", by_status(CruiseStatus::Scheduled)),
            StatValue::integer("cancelled", "Cancelled", by_status(CruiseStatus::Cancelled)),
            StatValue::integer("completed", "Completed", by_status(CruiseStatus::Completed)),
            StatValue::new(
                "avg_duration",
                "Average duration (days)",
                avg_duration,
                ValueFormat::Number { decimals: 1 },
            ),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Cruise line", "Ship", "Days", "Start", "End", "Status"]
    }

    fn row(c: &Cruise) -> Vec<String> {
        vec![
            c.name.clone(),
            or_dash(c.cruise_line_name.as_deref()),
            or_dash(c.ship_name.as_deref()),
            or_dash(c.duration_days),
            or_dash(c.start_date.as_ref().map(format_date)),
            or_dash(c.end_date.as_ref().map(format_date)),
            c.status.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ResourceId;

    fn cruise(status: CruiseStatus, days: Option<u32>) -> Cruise {
        Cruise {
            id: ResourceId::new_v4(),
            name: "Fjords".to_string(),
            cruise_line: ResourceId::new_v4(),
            cruise_line_name: Some("Hurtigruten".to_string()),
            ship: None,
            ship_name: None,
            departure_port: None,
            arrival_port: None,
            duration_days: days,
            start_date: None,
            end_date: None,
            status,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_cruise_statistics() {
        let items = vec![
            cruise(CruiseStatus::Scheduled, Some(7)),
            cruise(CruiseStatus::Scheduled, Some(10)),
            cruise(CruiseStatus::Cancelled, None),
            cruise(CruiseStatus::Completed, Some(4)),
        ];
        let stats = CruiseList::statistics(&items, 4);
        assert_eq!(stats[1].value, Some(2.0));
        assert_eq!(stats[2].value, Some(1.0));
        assert_eq!(stats[3].value, Some(1.0));
        assert_eq!(stats[4].value, Some(7.0));
    }
}
