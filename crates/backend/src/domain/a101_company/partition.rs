use serde_json::{Map, Value};
use thiserror::Error;

/// Маркерная колонка: с неё начинается блок показателей банкротства.
pub const BANKRUPTCY_MARKER: &str =
    "возбуждено производство по делу о несостоятельности (банкротстве)";

/// Основные реквизиты компании (колонки до маркера)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreFields {
    pub company_name: Option<String>,
    pub region: Option<String>,
    pub industry: Option<String>,
}

/// Ошибки разбиения строки на основные реквизиты и блок банкротства
#[derive(Debug, Error, PartialEq)]
pub enum PartitionError {
    #[error("unexpected column '{0}' before the bankruptcy marker")]
    UnexpectedColumn(String),
}

/// Разбивает строку файла на основные реквизиты и показатели банкротства.
///
/// Колонка уходит в блок банкротства, если её имя содержит маркер или её
/// позиция не раньше позиции маркерной колонки; порядок колонок исходного
/// файла сохраняется. Если маркерной колонки в файле нет, блок банкротства
/// остаётся пустым, а все колонки считаются основными.
pub fn partition_row(
    row: &[(String, Option<String>)],
) -> Result<(CoreFields, Map<String, Value>), PartitionError> {
    let marker_pos = row.iter().position(|(name, _)| name == BANKRUPTCY_MARKER);

    let mut core = CoreFields::default();
    let mut bankruptcy_data = Map::new();

    for (idx, (name, value)) in row.iter().enumerate() {
        let is_extended = name.contains(BANKRUPTCY_MARKER)
            || marker_pos.map_or(false, |pos| idx >= pos);

        if is_extended {
            let json_value = match value {
                Some(v) => Value::String(v.clone()),
                None => Value::Null,
            };
            bankruptcy_data.insert(name.clone(), json_value);
        } else {
            match name.as_str() {
                "company_name" => core.company_name = value.clone(),
                "region" => core.region = value.clone(),
                "industry" => core.industry = value.clone(),
                other => return Err(PartitionError::UnexpectedColumn(other.to_string())),
            }
        }
    }

    Ok((core, bankruptcy_data))
}
