use contracts::domain::a001_property::{Property, PropertyStatus};
use contracts::shared::stats::{StatValue, ValueFormat};

use crate::shared::filter_state::Dimension;
use crate::shared::format::{format_datetime, or_dash};
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::{average_of, count_where, round_to};

// ============================================================================
// Filter dimensions
// ============================================================================

fn status(p: &Property) -> Option<String> {
    Some(p.status.code().to_string())
}

fn property_type(p: &Property) -> Option<String> {
    p.property_type_name
        .clone()
        .or_else(|| p.property_type.map(|id| id.as_string()))
}

fn property_category(p: &Property) -> Option<String> {
    p.property_category_name
        .clone()
        .or_else(|| p.property_category.map(|id| id.as_string()))
}

static DIMENSIONS: [Dimension<Property>; 3] = [
    Dimension {
        key: "status",
        label: "Status",
        extract: status,
    },
    Dimension {
        key: "property_type",
        label: "Type",
        extract: property_type,
    },
    Dimension {
        key: "property_category",
        label: "Category",
        extract: property_category,
    },
];

// ============================================================================
// Binding
// ============================================================================

/// Экран списка объектов размещения
pub struct PropertyList;

impl ListResource for PropertyList {
    type Entity = Property;

    const KEY: &'static str = "properties";
    const LOAD_ERROR: &'static str = "Failed to load accommodations";
    const ROUTE: &'static str = "/travel-products/accommodations";

    fn dimensions() -> &'static [Dimension<Property>] {
        &DIMENSIONS
    }

    /// Всего, по статусам, средний рейтинг (2 знака; прочерк без оценок)
    fn statistics(items: &[Property], total_count: usize) -> Vec<StatValue> {
        let by_status = |s: PropertyStatus| count_where(items, |p| p.status == s);
        let avg_rating = average_of(items, |p| p.rating).map(|r| round_to(r, 2));

        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer("active", "Active", by_status(PropertyStatus::Active)),
            StatValue::integer("inactive", "Inactive", by_status(PropertyStatus::Inactive)),
            StatValue::integer("pending", "Pending", by_status(PropertyStatus::Pending)),
            StatValue::integer("suspended", "Suspended", by_status(PropertyStatus::Suspended)),
            StatValue::new(
                "avg_rating",
                "Average rating",
                avg_rating,
                ValueFormat::Number { decimals: 2 },
            ),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Type", "Category", "Rating", "Reviews", "Status", "Created"]
    }

    fn row(p: &Property) -> Vec<String> {
        vec![
            p.name.clone(),
            or_dash(p.property_type_name.as_deref()),
            or_dash(p.property_category_name.as_deref()),
            or_dash(p.rating.map(|r| format!("{:.2}", r))),
            p.total_reviews.to_string(),
            p.status.label().to_string(),
            format_datetime(&p.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::FilterState;
    use contracts::domain::common::ResourceId;

    fn property(status: PropertyStatus, kind: &str, rating: Option<f64>) -> Property {
        Property {
            id: ResourceId::new_v4(),
            name: format!("{} {}", kind, status.code()),
            property_type: None,
            property_type_name: Some(kind.to_string()),
            property_category: None,
            property_category_name: None,
            address: None,
            rating,
            total_reviews: 0,
            status,
            check_in_time: None,
            check_out_time: None,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_status_and_type_filters() {
        let items = vec![
            property(PropertyStatus::Active, "Hotel", Some(4.0)),
            property(PropertyStatus::Inactive, "Hotel", None),
            property(PropertyStatus::Active, "Villa", Some(5.0)),
        ];
        let mut filters = FilterState::new(PropertyList::dimensions());
        filters.set_filter("status", "active").unwrap();
        filters.set_filter("property_type", "all").unwrap();
        assert_eq!(filters.apply(&items).len(), 2);

        filters.set_filter("property_type", "Hotel").unwrap();
        assert_eq!(filters.apply(&items), vec![items[0].clone()]);
    }

    #[test]
    fn test_average_rating_ignores_unrated() {
        let items = vec![
            property(PropertyStatus::Active, "Hotel", Some(4.0)),
            property(PropertyStatus::Pending, "Hotel", None),
            property(PropertyStatus::Active, "Hotel", Some(5.0)),
        ];
        let stats = PropertyList::statistics(&items, 3);
        let avg = stats.iter().find(|s| s.id.as_str() == "avg_rating").unwrap();
        assert_eq!(avg.value, Some(4.5));
        assert_eq!(stats[1].value, Some(2.0));
        assert_eq!(stats[3].value, Some(1.0));

        let stats = PropertyList::statistics(&[], 0);
        assert_eq!(stats.last().unwrap().value, None);
    }
}
