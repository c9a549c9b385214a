use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Stat identity & display metadata
// ---------------------------------------------------------------------------

/// Stable identifier of one summary card (e.g. `"avg_rating"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatId(pub String);

impl StatId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How to format the numeric value of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Integer,
    Number { decimals: u8 },
    Percent { decimals: u8 },
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed summary value shown above a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub id: StatId,
    pub label: String,
    /// `None` when there is nothing to aggregate (rendered as a dash).
    pub value: Option<f64>,
    pub format: ValueFormat,
    /// Secondary text under the value (e.g. "of 12 on page").
    #[serde(default)]
    pub hint: Option<String>,
}

impl StatValue {
    pub fn new(id: &str, label: &str, value: Option<f64>, format: ValueFormat) -> Self {
        Self {
            id: StatId::new(id),
            label: label.to_string(),
            value,
            format,
            hint: None,
        }
    }

    pub fn integer(id: &str, label: &str, value: usize) -> Self {
        Self::new(id, label, Some(value as f64), ValueFormat::Integer)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_format_tagging() {
        let json = serde_json::to_string(&ValueFormat::Percent { decimals: 0 }).unwrap();
        assert_eq!(json, r#"{"kind":"Percent","decimals":0}"#);
        let back: ValueFormat = serde_json::from_str(r#"{"kind":"Integer"}"#).unwrap();
        assert_eq!(back, ValueFormat::Integer);
    }

    #[test]
    fn test_integer_stat() {
        let stat = StatValue::integer("total", "Total", 12).with_hint("on page");
        assert_eq!(stat.value, Some(12.0));
        assert_eq!(stat.id.as_str(), "total");
        assert_eq!(stat.hint.as_deref(), Some("on page"));
    }
}
