use contracts::domain::a006_cruise_cabin_type::CruiseCabinType;
use contracts::shared::stats::StatValue;

use crate::shared::filter_state::Dimension;
use crate::shared::format::{format_datetime, or_dash, percent_hint};
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::{average_of, count_where, percent_of};

fn has_description(c: &CruiseCabinType) -> Option<String> {
    Some(if c.has_description() { "with" } else { "without" }.to_string())
}

static DIMENSIONS: [Dimension<CruiseCabinType>; 1] = [Dimension {
    key: "has_description",
    label: "Description",
    extract: has_description,
}];

pub struct CruiseCabinTypeList;

impl ListResource for CruiseCabinTypeList {
    type Entity = CruiseCabinType;

    const KEY: &'static str = "cabin-types";
    const LOAD_ERROR: &'static str = "Failed to load cabin types";
    const ROUTE: &'static str = "/travel-products/cruises/cabin-types";

    fn dimensions() -> &'static [Dimension<CruiseCabinType>] {
        &DIMENSIONS
    }

    /// Среднее число кабин округляется до целого
    fn statistics(items: &[CruiseCabinType], total_count: usize) -> Vec<StatValue> {
        let described = count_where(items, |c| c.has_description());
        let avg_cabins = average_of(items, |c| c.cabins_count.map(f64::from)).unwrap_or(0.0);
        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer("with_description", "With description", described)
                .with_hint(percent_hint(percent_of(described, items.len()))),
            StatValue::integer(
                "with_cabins",
                "With cabins",
                count_where(items, |c| c.cabins_count.unwrap_or(0) > 0),
            ),
            StatValue::integer("avg_cabins", "Average cabins", avg_cabins.round() as usize),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Description", "Cabins", "Created"]
    }

    fn row(c: &CruiseCabinType) -> Vec<String> {
        vec![
            c.name.clone(),
            or_dash(c.description.as_deref().filter(|d| !d.trim().is_empty())),
            c.cabins_count.unwrap_or(0).to_string(),
            format_datetime(&c.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ResourceId;

    fn cabin(description: Option<&str>, cabins: Option<u32>) -> CruiseCabinType {
        CruiseCabinType {
            id: ResourceId::new_v4(),
            name: "Balcony".to_string(),
            description: description.map(str::to_string),
            cabins_count: cabins,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_cabin_statistics() {
        let items = vec![
            cabin(Some("Sea view"), Some(10)),
            cabin(None, Some(5)),
            cabin(Some("  "), None),
        ];
        let stats = CruiseCabinTypeList::statistics(&items, 3);
        assert_eq!(stats[1].value, Some(1.0));
        assert_eq!(stats[2].value, Some(2.0));
        // (10 + 5) / 2 = 7.5 -> 8
        assert_eq!(stats[3].value, Some(8.0));
    }
}
