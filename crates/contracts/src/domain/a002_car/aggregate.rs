use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceId};

// ============================================================================
// Enums
// ============================================================================

/// Тип трансмиссии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub fn code(&self) -> &'static str {
        match self {
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

/// Тип топлива
///
/// Старые записи используют "gasoline" вместо "petrol".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[serde(alias = "gasoline")]
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn code(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }

    /// Электромобиль или гибрид
    pub fn is_electrified(&self) -> bool {
        matches!(self, FuelType::Electric | FuelType::Hybrid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
}

impl CarStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CarStatus::Available => "available",
            CarStatus::Rented => "rented",
            CarStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CarStatus::Available => "Available",
            CarStatus::Rented => "Rented",
            CarStatus::Maintenance => "Maintenance",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Автомобиль в парке прокатной компании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: ResourceId,
    pub company: ResourceId,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub category: Option<ResourceId>,
    #[serde(default)]
    pub category_name: Option<String>,

    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub seats: Option<u32>,

    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub status: CarStatus,

    #[serde(default)]
    pub availabilities_count: Option<u32>,

    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Car {
    /// "Peugeot 208 (2022)" или то, что известно из марки/модели
    pub fn title(&self) -> String {
        let name = [self.make.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let name = if name.is_empty() { "-".to_string() } else { name };
        match self.year {
            Some(year) => format!("{} ({})", name, year),
            None => name,
        }
    }
}

impl ApiResource for Car {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.title()
    }

    fn resource_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "car"
    }

    fn endpoint() -> &'static str {
        "/api/car-rentals/cars/"
    }

    fn element_name() -> &'static str {
        "Car"
    }

    fn list_name() -> &'static str {
        "Car rentals"
    }
}
