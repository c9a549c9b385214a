//! Утилиты форматирования значений для таблиц и карточек

use chrono::{DateTime, NaiveDate, Utc};
use contracts::shared::stats::{StatValue, ValueFormat};

/// Прочерк для отсутствующих значений
pub const DASH: &str = "-";

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use admin::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Значение карточки статистики; `None` -> прочерк
pub fn format_stat(stat: &StatValue) -> String {
    let Some(value) = stat.value else {
        return DASH.to_string();
    };
    match stat.format {
        ValueFormat::Integer => format_number_with_decimals(value, 0),
        ValueFormat::Number { decimals } => format_number_with_decimals(value, decimals),
        ValueFormat::Percent { decimals } => {
            format!("{}%", format_number_with_decimals(value, decimals))
        }
    }
}

/// "42% of total"
pub fn percent_hint(percent: f64) -> String {
    format!("{}% of total", format_number_with_decimals(percent, 0))
}

pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| DASH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.56, 2), "1 234.56");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1 234 567");
        assert_eq!(format_number_with_decimals(0.0, 1), "0.0");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1 234.5");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_stat() {
        let avg = StatValue::new("avg_rating", "Average rating", Some(4.456), ValueFormat::Number { decimals: 2 });
        assert_eq!(format_stat(&avg), "4.46");

        let none = StatValue::new("avg_rating", "Average rating", None, ValueFormat::Number { decimals: 2 });
        assert_eq!(format_stat(&none), "-");

        let pct = StatValue::new("share", "Share", Some(42.0), ValueFormat::Percent { decimals: 0 });
        assert_eq!(format_stat(&pct), "42%");
    }

    #[test]
    fn test_dates_and_dash() {
        let dt = Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 0).unwrap();
        assert_eq!(format_datetime(&dt), "2025-06-01 09:05");
        assert_eq!(or_dash::<u32>(None), "-");
        assert_eq!(or_dash(Some(3)), "3");
        assert_eq!(percent_hint(33.0), "33% of total");
    }
}
