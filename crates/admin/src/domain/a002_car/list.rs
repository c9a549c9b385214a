use contracts::domain::a002_car::{Car, Transmission};
use contracts::shared::stats::StatValue;

use crate::shared::filter_state::Dimension;
use crate::shared::format::{or_dash, percent_hint};
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::{count_where, percent_of};

fn company(c: &Car) -> Option<String> {
    c.company_name
        .clone()
        .or_else(|| Some(c.company.as_string()))
}

fn category(c: &Car) -> Option<String> {
    c.category_name
        .clone()
        .or_else(|| c.category.map(|id| id.as_string()))
}

fn transmission(c: &Car) -> Option<String> {
    Some(c.transmission.code().to_string())
}

fn fuel_type(c: &Car) -> Option<String> {
    Some(c.fuel_type.code().to_string())
}

static DIMENSIONS: [Dimension<Car>; 4] = [
    Dimension {
        key: "company",
        label: "Company",
        extract: company,
    },
    Dimension {
        key: "category",
        label: "Category",
        extract: category,
    },
    Dimension {
        key: "transmission",
        label: "Transmission",
        extract: transmission,
    },
    Dimension {
        key: "fuel_type",
        label: "Fuel",
        extract: fuel_type,
    },
];

/// Экран списка автомобилей
pub struct CarList;

impl ListResource for CarList {
    type Entity = Car;

    const KEY: &'static str = "cars";
    const LOAD_ERROR: &'static str = "Failed to load cars";
    const ROUTE: &'static str = "/travel-products/car-rentals";

    fn dimensions() -> &'static [Dimension<Car>] {
        &DIMENSIONS
    }

    fn statistics(items: &[Car], total_count: usize) -> Vec<StatValue> {
        let automatic = count_where(items, |c| c.transmission == Transmission::Automatic);
        let manual = count_where(items, |c| c.transmission == Transmission::Manual);
        let electrified = count_where(items, |c| c.fuel_type.is_electrified());
        let available = count_where(items, |c| c.availabilities_count.unwrap_or(0) > 0);

        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer("automatic", "Automatic", automatic)
                .with_hint(percent_hint(percent_of(automatic, items.len()))),
            StatValue::integer("manual", "Manual", manual),
            StatValue::integer("electric_hybrid", "Electric / Hybrid", electrified),
            StatValue::integer("with_availability", "With availability", available),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Car", "Company", "Category", "Seats", "Transmission", "Fuel", "Status"]
    }

    fn row(c: &Car) -> Vec<String> {
        vec![
            c.title(),
            or_dash(c.company_name.as_deref()),
            or_dash(c.category_name.as_deref()),
            or_dash(c.seats),
            c.transmission.label().to_string(),
            c.fuel_type.label().to_string(),
            c.status.label().to_string(),
        ]
    }
}
