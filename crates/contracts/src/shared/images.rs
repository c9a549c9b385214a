//! Image galleries shared by several resource types.
//!
//! Every gallery endpoint returns the same record shape; what differs per owner
//! is the collection path, the owner filter parameter and how the primary image
//! is marked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::ResourceId;

/// Как помечается главное изображение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryMarker {
    /// Флаг `is_primary`
    Flag,
    /// `image_type == "main"` (галерея объектов размещения)
    MainType,
}

/// Тип изображения по умолчанию для новых записей галереи
pub const GALLERY_IMAGE_TYPE: &str = "gallery";
/// Тип главного изображения для `PrimaryMarker::MainType`
pub const MAIN_IMAGE_TYPE: &str = "main";

/// Владелец галереи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ImageOwner {
    Property(ResourceId),
    Car(ResourceId),
    Cruise(ResourceId),
    CruiseShip(ResourceId),
    Airline(ResourceId),
    Airport(ResourceId),
}

impl ImageOwner {
    pub fn id(&self) -> ResourceId {
        match self {
            ImageOwner::Property(id)
            | ImageOwner::Car(id)
            | ImageOwner::Cruise(id)
            | ImageOwner::CruiseShip(id)
            | ImageOwner::Airline(id)
            | ImageOwner::Airport(id) => *id,
        }
    }

    /// Короткое имя вида владельца (используется в CLI)
    pub fn kind(&self) -> &'static str {
        match self {
            ImageOwner::Property(_) => "property",
            ImageOwner::Car(_) => "car",
            ImageOwner::Cruise(_) => "cruise",
            ImageOwner::CruiseShip(_) => "cruise_ship",
            ImageOwner::Airline(_) => "airline",
            ImageOwner::Airport(_) => "airport",
        }
    }

    /// Парсинг из пары "вид + id"
    pub fn from_kind(kind: &str, id: ResourceId) -> Option<Self> {
        match kind {
            "property" => Some(ImageOwner::Property(id)),
            "car" => Some(ImageOwner::Car(id)),
            "cruise" => Some(ImageOwner::Cruise(id)),
            "cruise_ship" | "cruise-ship" => Some(ImageOwner::CruiseShip(id)),
            "airline" => Some(ImageOwner::Airline(id)),
            "airport" => Some(ImageOwner::Airport(id)),
            _ => None,
        }
    }

    /// Коллекция изображений в API
    pub fn endpoint(&self) -> &'static str {
        match self {
            ImageOwner::Property(_) => "/api/accommodations/property-images/",
            ImageOwner::Car(_) => "/api/images/car-images/",
            ImageOwner::Cruise(_) => "/api/images/cruise-images/",
            ImageOwner::CruiseShip(_) => "/api/images/cruise-ship-images/",
            ImageOwner::Airline(_) => "/api/images/airline-images/",
            ImageOwner::Airport(_) => "/api/images/airport-images/",
        }
    }

    /// Имя query-параметра фильтра по владельцу
    pub fn owner_param(&self) -> &'static str {
        match self {
            ImageOwner::Property(_) => "property_id",
            ImageOwner::Car(_) => "car_id",
            ImageOwner::Cruise(_) => "cruise_id",
            ImageOwner::CruiseShip(_) => "cruise_ship_id",
            ImageOwner::Airline(_) => "airline_id",
            ImageOwner::Airport(_) => "airport_id",
        }
    }

    /// Имя поля-ссылки на владельца при создании изображения
    pub fn owner_field(&self) -> &'static str {
        match self {
            ImageOwner::Property(_) => "property",
            ImageOwner::Car(_) => "car",
            ImageOwner::Cruise(_) => "cruise",
            ImageOwner::CruiseShip(_) => "cruise_ship",
            ImageOwner::Airline(_) => "airline",
            ImageOwner::Airport(_) => "airport",
        }
    }

    pub fn primary_marker(&self) -> PrimaryMarker {
        match self {
            ImageOwner::Property(_) => PrimaryMarker::MainType,
            _ => PrimaryMarker::Flag,
        }
    }
}

/// Запись изображения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ResourceId,
    pub image_url: String,
    #[serde(default = "default_image_type")]
    pub image_type: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

fn default_image_type() -> String {
    GALLERY_IMAGE_TYPE.to_string()
}

impl ImageRecord {
    /// Является ли изображение главным по правилам владельца
    pub fn is_primary_for(&self, marker: PrimaryMarker) -> bool {
        match marker {
            PrimaryMarker::Flag => self.is_primary,
            PrimaryMarker::MainType => self.image_type == MAIN_IMAGE_TYPE,
        }
    }
}

/// Частичное обновление изображения (PATCH)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
}

impl ImagePatch {
    /// Патч, который делает изображение главным (или снимает отметку)
    pub fn primary(marker: PrimaryMarker, primary: bool) -> Self {
        match marker {
            PrimaryMarker::Flag => Self {
                is_primary: Some(primary),
                image_type: None,
            },
            PrimaryMarker::MainType => Self {
                is_primary: None,
                image_type: Some(if primary { MAIN_IMAGE_TYPE } else { GALLERY_IMAGE_TYPE }.to_string()),
            },
        }
    }

    /// Применить патч к локальной копии записи
    pub fn apply_to(&self, image: &mut ImageRecord) {
        if let Some(is_primary) = self.is_primary {
            image.is_primary = is_primary;
        }
        if let Some(image_type) = &self.image_type {
            image.image_type = image_type.clone();
        }
    }
}

/// Новое изображение (POST)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewImage {
    pub image_url: String,
    pub image_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    pub display_order: i32,
    pub is_primary: bool,
}
