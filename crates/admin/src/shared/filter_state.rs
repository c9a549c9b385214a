//! Client-side list filters.
//!
//! Each dimension is an equality predicate over one extracted field. Dimensions
//! compose with AND; a dimension set to `All` imposes no constraint. Filters are
//! applied to the page already fetched and never sent to the server.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Unknown filter dimension: {0}")]
    UnknownDimension(String),
}

/// Измерение фильтра (например, "status")
pub struct Dimension<E> {
    pub key: &'static str,
    pub label: &'static str,
    /// Значение поля записи в том же виде, в каком его выбирают в фильтре
    pub extract: fn(&E) -> Option<String>,
}

impl<E> fmt::Debug for Dimension<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dimension")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

/// Выбранное значение измерения
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    #[default]
    All,
    Is(String),
}

impl FilterValue {
    pub const ALL: &'static str = "all";

    /// `"all"` и пустая строка означают отсутствие ограничения
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == Self::ALL {
            FilterValue::All
        } else {
            FilterValue::Is(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => Self::ALL,
            FilterValue::Is(v) => v,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::parse(value)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Состояние фильтров списка
pub struct FilterState<E: 'static> {
    dimensions: &'static [Dimension<E>],
    values: Vec<FilterValue>,
}

impl<E> Clone for FilterState<E> {
    fn clone(&self) -> Self {
        Self {
            dimensions: self.dimensions,
            values: self.values.clone(),
        }
    }
}

impl<E> fmt::Debug for FilterState<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.dimensions
                    .iter()
                    .zip(self.values.iter())
                    .map(|(d, v)| (d.key, v.as_str())),
            )
            .finish()
    }
}

impl<E> FilterState<E> {
    pub fn new(dimensions: &'static [Dimension<E>]) -> Self {
        Self {
            dimensions,
            values: vec![FilterValue::All; dimensions.len()],
        }
    }

    pub fn dimensions(&self) -> &'static [Dimension<E>] {
        self.dimensions
    }

    fn index_of(&self, key: &str) -> Result<usize, FilterError> {
        self.dimensions
            .iter()
            .position(|d| d.key == key)
            .ok_or_else(|| FilterError::UnknownDimension(key.to_string()))
    }

    pub fn set_filter(&mut self, key: &str, value: impl Into<FilterValue>) -> Result<(), FilterError> {
        let idx = self.index_of(key)?;
        self.values[idx] = value.into();
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&FilterValue, FilterError> {
        let idx = self.index_of(key)?;
        Ok(&self.values[idx])
    }

    pub fn clear_all(&mut self) {
        self.values.iter_mut().for_each(|v| *v = FilterValue::All);
    }

    pub fn is_active(&self) -> bool {
        self.values.iter().any(|v| !v.is_all())
    }

    pub fn active_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_all()).count()
    }

    /// Активные измерения в порядке объявления: (key, value)
    pub fn active(&self) -> Vec<(&'static str, &str)> {
        self.dimensions
            .iter()
            .zip(self.values.iter())
            .filter_map(|(d, v)| match v {
                FilterValue::All => None,
                FilterValue::Is(value) => Some((d.key, value.as_str())),
            })
            .collect()
    }

    pub fn matches(&self, entity: &E) -> bool {
        self.dimensions
            .iter()
            .zip(self.values.iter())
            .all(|(dimension, value)| match value {
                FilterValue::All => true,
                FilterValue::Is(expected) => {
                    (dimension.extract)(entity).as_deref() == Some(expected.as_str())
                }
            })
    }

    /// Подмножество записей, удовлетворяющих всем измерениям (порядок сохраняется)
    pub fn apply(&self, entities: &[E]) -> Vec<E>
    where
        E: Clone,
    {
        entities
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }

    /// Отсортированные различные непустые значения измерения (для выпадающих списков)
    pub fn options(&self, entities: &[E], key: &str) -> Result<Vec<String>, FilterError> {
        let idx = self.index_of(key)?;
        let extract = self.dimensions[idx].extract;
        let values: BTreeSet<String> = entities
            .iter()
            .filter_map(extract)
            .filter(|v| !v.trim().is_empty())
            .collect();
        Ok(values.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        status: &'static str,
        property_type: &'static str,
        city: Option<&'static str>,
    }

    fn status(r: &Row) -> Option<String> {
        Some(r.status.to_string())
    }

    fn property_type(r: &Row) -> Option<String> {
        Some(r.property_type.to_string())
    }

    fn city(r: &Row) -> Option<String> {
        r.city.map(str::to_string)
    }

    static DIMS: [Dimension<Row>; 3] = [
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
            key: "city",
            label: "City",
            extract: city,
        },
    ];

    fn rows() -> Vec<Row> {
        vec![
            Row {
                status: "available",
                property_type: "hotel",
                city: Some("Paris"),
            },
            Row {
                status: "unavailable",
                property_type: "hotel",
                city: None,
            },
            Row {
                status: "available",
                property_type: "villa",
                city: Some("Nice"),
            },
        ]
    }

    #[test]
    fn test_conjunctive_equality() {
        let mut state = FilterState::new(&DIMS);
        state.set_filter("status", "available").unwrap();
        state.set_filter("property_type", "all").unwrap();

        let data = &rows()[..2];
        assert_eq!(state.apply(data), vec![data[0].clone()]);

        state.set_filter("property_type", "villa").unwrap();
        assert_eq!(state.apply(&rows()), vec![rows()[2].clone()]);
        assert_eq!(state.active_count(), 2);
        assert_eq!(state.active(), vec![("status", "available"), ("property_type", "villa")]);
    }

    #[test]
    fn test_missing_field_never_matches_concrete_value() {
        let mut state = FilterState::new(&DIMS);
        state.set_filter("city", "Paris").unwrap();
        assert_eq!(state.apply(&rows()).len(), 1);
    }

    #[test]
    fn test_clear_all_is_identity() {
        let mut state = FilterState::new(&DIMS);
        assert_eq!(state.apply(&rows()), rows());

        state.set_filter("status", "unavailable").unwrap();
        state.set_filter("city", "Nice").unwrap();
        assert!(state.is_active());
        assert!(state.apply(&rows()).is_empty());

        state.clear_all();
        assert!(!state.is_active());
        assert_eq!(state.apply(&rows()), rows());
        state.clear_all();
        assert_eq!(state.apply(&rows()), rows());
    }

    #[test]
    fn test_unknown_dimension() {
        let mut state = FilterState::new(&DIMS);
        assert_eq!(
            state.set_filter("color", "red"),
            Err(FilterError::UnknownDimension("color".to_string()))
        );
        assert!(state.get("color").is_err());
    }

    #[test]
    fn test_options_sorted_distinct() {
        let state = FilterState::new(&DIMS);
        assert_eq!(
            state.options(&rows(), "city").unwrap(),
            vec!["Nice".to_string(), "Paris".to_string()]
        );
        assert_eq!(
            state.options(&rows(), "status").unwrap(),
            vec!["available".to_string(), "unavailable".to_string()]
        );
    }

    #[test]
    fn test_filter_value_parse() {
        assert_eq!(FilterValue::parse("all"), FilterValue::All);
        assert_eq!(FilterValue::parse(" "), FilterValue::All);
        assert_eq!(FilterValue::parse("gold"), FilterValue::Is("gold".to_string()));
    }
}
