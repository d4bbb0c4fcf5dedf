//! Мягкий разбор числовых значений из `bankruptcy_data`.
//!
//! Значения приходят из CSV как строки (или null), поэтому любая
//! агрегатная формула обязана переживать мусор в данных: нечисловое
//! значение трактуется как отсутствующее, а не как ошибка загрузки.

use serde_json::Value;

/// Целое из JSON значения: число без дробной части или строка вида "-42".
pub fn parse_i64(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Вещественное из JSON значения; в строках допускается запятая
/// как десятичный разделитель ("12,5").
pub fn parse_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    }
}
