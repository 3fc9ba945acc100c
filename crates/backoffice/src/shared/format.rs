//! Форматирование значений для текстового вывода таблиц

use contracts::shared::records::FieldValue;

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
/// ```
/// use backoffice::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежное значение: 2 знака после запятой
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Cell text for plain-text tables.
///
/// Whole numbers get thousands separators, fractional ones are shown as money.
pub fn format_cell(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) if n.fract() == 0.0 => format_number_with_decimals(*n, 0),
        FieldValue::Number(n) => format_money(*n),
        other => other.display(),
    }
}
