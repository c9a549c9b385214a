//! Decimal fields (`DecimalField` on the API side) are serialized as JSON strings
//! like `"4.50"`, but fixtures and some endpoints send plain numbers.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Number(f64),
    Text(String),
}

/// Декодирует `Option<f64>` из числа, строки или `null`
///
/// Пустая строка трактуется как отсутствие значения.
pub fn deserialize_decimal_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<DecimalRepr> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(DecimalRepr::Number(n)) => Ok(Some(n)),
        Some(DecimalRepr::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid decimal '{}': {}", s, e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_decimal_opt")]
        value: Option<f64>,
    }

    fn parse(json: &str) -> Option<f64> {
        serde_json::from_str::<Holder>(json).unwrap().value
    }

    #[test]
    fn test_decimal_accepts_all_wire_forms() {
        assert_eq!(parse(r#"{"value": "4.50"}"#), Some(4.5));
        assert_eq!(parse(r#"{"value": 3}"#), Some(3.0));
        assert_eq!(parse(r#"{"value": null}"#), None);
        assert_eq!(parse(r#"{"value": ""}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        assert!(serde_json::from_str::<Holder>(r#"{"value": "abc"}"#).is_err());
    }
}
