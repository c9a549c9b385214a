//! Aggregates for the summary cards above each list.

use std::collections::HashSet;

pub fn count_where<E>(items: &[E], pred: impl Fn(&E) -> bool) -> usize {
    items.iter().filter(|e| pred(e)).count()
}

/// Среднее по записям, у которых поле задано (`None` не считается нулем)
pub fn average_of<E>(items: &[E], field: impl Fn(&E) -> Option<f64>) -> Option<f64> {
    let (sum, n) = items
        .iter()
        .filter_map(field)
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

pub fn sum_of<E>(items: &[E], field: impl Fn(&E) -> Option<f64>) -> f64 {
    items.iter().filter_map(field).filter(|v| v.is_finite()).sum()
}

/// Число различных непустых значений поля
pub fn distinct_count<E, S>(items: &[E], field: impl Fn(&E) -> Option<S>) -> usize
where
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    for value in items.iter().filter_map(field) {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            seen.insert(value.to_string());
        }
    }
    seen.len()
}

/// Доля `part` от `total` в процентах, округленная до целого; 0 при `total == 0`
pub fn percent_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0).round()
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
