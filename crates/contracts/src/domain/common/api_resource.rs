use super::ResourceId;

/// Трейт для записи, доступной через REST API
///
/// Определяет идентификатор записи и статические метаданные ресурса
pub trait ApiResource {
    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> ResourceId;

    /// Получить отображаемое название записи (имя, номер рейса, email...)
    fn display_name(&self) -> String;

    // ============================================================================
    // Метаданные ресурса (статические данные)
    // ============================================================================

    /// Индекс ресурса в системе (например, "a001")
    fn resource_index() -> &'static str;

    /// Имя коллекции (например, "property")
    fn collection_name() -> &'static str;

    /// Путь коллекции в API, всегда с завершающим слешем
    /// (например, "/api/accommodations/properties/")
    fn endpoint() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Property")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Properties")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя ресурса для системы (например, "a001_property")
    fn full_name() -> String {
        format!("{}_{}", Self::resource_index(), Self::collection_name())
    }

    /// Путь к конкретной записи (например, "/api/accommodations/properties/<id>/")
    fn item_path(id: &str) -> String {
        format!("{}{}/", Self::endpoint(), id.trim_matches('/'))
    }
}
