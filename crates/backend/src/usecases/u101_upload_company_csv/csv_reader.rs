//! Разбор CSV файла в упорядоченные строки «колонка → значение».
//!
//! Формат и кодировку гарантирует HTTP слой; здесь файл уже текст.
//! Пустая ячейка означает отсутствующее значение (None), порядок колонок
//! сохраняется — дальше по нему работает разбиение на реквизиты и блок
//! банкротства.

/// Одна строка файла: пары (имя колонки, значение) в порядке колонок
pub type RawRow = Vec<(String, Option<String>)>;

pub fn parse_csv_text(text: &str) -> Result<Vec<RawRow>, csv::Error> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    tracing::debug!(
        "Company CSV headers: {:?}",
        headers.iter().collect::<Vec<_>>()
    );

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row: RawRow = Vec::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let value = record
                .get(i)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            row.push((header.trim().to_string(), value));
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keep_column_order_and_empty_cells_become_none() {
        let csv_text = "company_name,region,industry\nТест 1,Москва,IT\nТест 2,,Manufacturing\n";

        let rows = parse_csv_text(csv_text).unwrap();
        assert_eq!(rows.len(), 2);

        let names: Vec<&str> = rows[0].iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["company_name", "region", "industry"]);

        assert_eq!(rows[1][0].1.as_deref(), Some("Тест 2"));
        assert_eq!(rows[1][1].1, None);
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let csv_text = "\u{FEFF}company_name,region\nA,Москва\n";

        let rows = parse_csv_text(csv_text).unwrap();
        assert_eq!(rows[0][0].0, "company_name");
    }

    #[test]
    fn test_short_records_are_padded_with_none() {
        let csv_text = "company_name,region,industry\nA,Москва\n";

        let rows = parse_csv_text(csv_text).unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0][2].1, None);
    }

    #[test]
    fn test_empty_file_with_headers_yields_no_rows() {
        let rows = parse_csv_text("company_name,region,industry\n").unwrap();
        assert!(rows.is_empty());
    }
}
