use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Идентификатор записи REST API (UUID primary key на стороне сервера)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub Uuid);

impl ResourceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    /// Преобразовать ID в строку (формат, который ожидает API в URL)
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    /// Создать ID из строки
    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s.trim())
            .map(ResourceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ResourceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_parses_and_prints() {
        let raw = "6f1c1d1e-8a51-4b8e-9f57-9b44f1c3a0d2";
        let id = ResourceId::from_string(raw).unwrap();
        assert_eq!(id.as_string(), raw);
        assert!(ResourceId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_resource_id_is_transparent_in_json() {
        let id = ResourceId::from_string("6f1c1d1e-8a51-4b8e-9f57-9b44f1c3a0d2").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6f1c1d1e-8a51-4b8e-9f57-9b44f1c3a0d2\"");
    }
}
