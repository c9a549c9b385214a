use contracts::domain::a003_car_rental_company::CarRentalCompany;
use contracts::shared::stats::StatValue;

use crate::shared::filter_state::Dimension;
use crate::shared::format::{format_datetime, or_dash, percent_hint};
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::{count_where, percent_of};

/// `with` / `without`
fn has_logo(c: &CarRentalCompany) -> Option<String> {
    Some(if c.has_logo() { "with" } else { "without" }.to_string())
}

static DIMENSIONS: [Dimension<CarRentalCompany>; 1] = [Dimension {
    key: "has_logo",
    label: "Logo",
    extract: has_logo,
}];

pub struct CarRentalCompanyList;

impl ListResource for CarRentalCompanyList {
    type Entity = CarRentalCompany;

    const KEY: &'static str = "car-companies";
    const LOAD_ERROR: &'static str = "Failed to load rental companies";
    const ROUTE: &'static str = "/travel-products/car-rentals/companies";

    fn dimensions() -> &'static [Dimension<CarRentalCompany>] {
        &DIMENSIONS
    }

    fn statistics(items: &[CarRentalCompany], total_count: usize) -> Vec<StatValue> {
        let with_logos = count_where(items, |c| c.has_logo());
        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer("with_logos", "With logos", with_logos)
                .with_hint(percent_hint(percent_of(with_logos, items.len()))),
            StatValue::integer(
                "with_locations",
                "With locations",
                count_where(items, |c| c.locations_count.unwrap_or(0) > 0),
            ),
            StatValue::integer(
                "with_cars",
                "With cars",
                count_where(items, |c| c.cars_count.unwrap_or(0) > 0),
            ),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Code", "Logo", "Locations", "Cars", "Created"]
    }

    fn row(c: &CarRentalCompany) -> Vec<String> {
        vec![
            c.name.clone(),
            or_dash(c.code.as_deref()),
            if c.has_logo() { "yes" } else { "no" }.to_string(),
            c.locations_count.unwrap_or(0).to_string(),
            c.cars_count.unwrap_or(0).to_string(),
            format_datetime(&c.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::FilterState;
    use contracts::domain::common::ResourceId;

    fn company(logo: Option<&str>, cars: Option<u32>) -> CarRentalCompany {
        CarRentalCompany {
            id: ResourceId::new_v4(),
            name: "Sixt".to_string(),
            code: None,
            logo_url: logo.map(str::to_string),
            locations_count: Some(1),
            cars_count: cars,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_logo_filter() {
        let items = vec![
            company(Some("https://cdn.example.com/sixt.png"), Some(4)),
            company(Some(""), None),
            company(None, Some(0)),
        ];
        let mut filters = FilterState::new(CarRentalCompanyList::dimensions());
        filters.set_filter("has_logo", "without").unwrap();
        assert_eq!(filters.apply(&items).len(), 2);

        let stats = CarRentalCompanyList::statistics(&items, items.len());
        assert_eq!(stats[1].value, Some(1.0));
        assert_eq!(stats[1].hint.as_deref(), Some("33% of total"));
        assert_eq!(stats[3].value, Some(1.0));
    }

    #[test]
    fn test_logo_share_is_relative_to_shown_rows() {
        // поиск: на странице 10 компаний из 37 найденных, у всех есть логотип
        let items: Vec<_> = (0..10)
            .map(|_| company(Some("https://cdn.example.com/logo.png"), Some(1)))
            .collect();
        let stats = CarRentalCompanyList::statistics(&items, 37);
        assert_eq!(stats[0].value, Some(37.0));
        assert_eq!(stats[1].value, Some(10.0));
        assert_eq!(stats[1].hint.as_deref(), Some("100% of total"));
    }
}
