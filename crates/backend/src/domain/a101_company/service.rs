use anyhow::Result;
use contracts::domain::a101_company::Company;
use sea_orm::{DatabaseTransaction, DbErr};
use serde_json::Value;
use uuid::Uuid;

use super::partition::{partition_row, PartitionError};
use super::repository::{self, Model};

/// Собирает запись компании из одной строки файла: реквизиты до маркерной
/// колонки, показатели банкротства — после (см. [`partition_row`]).
pub fn model_from_row(row: &[(String, Option<String>)]) -> Result<Model, PartitionError> {
    let (core, bankruptcy_data) = partition_row(row)?;

    Ok(Model {
        id: Uuid::new_v4().to_string(),
        company_name: core.company_name,
        region: core.region,
        industry: core.industry,
        bankruptcy_data: Value::Object(bankruptcy_data),
    })
}

/// Полная замена набора компаний: очистка и вставка в порядке входа.
/// Первая ошибка хранилища прерывает загрузку, откат — на вызывающей
/// стороне транзакции. Возвращает число вставленных записей.
pub async fn replace_all_txn(
    txn: &DatabaseTransaction,
    companies: Vec<Model>,
) -> Result<u64, DbErr> {
    let cleared = repository::clear_all_txn(txn).await?;
    if cleared > 0 {
        tracing::info!("Cleared {} previously loaded companies", cleared);
    }

    let mut inserted = 0u64;
    for company in companies {
        repository::insert_txn(txn, company).await?;
        inserted += 1;
    }
    Ok(inserted)
}

pub async fn list(limit: Option<u64>) -> Result<Vec<Company>> {
    let items = repository::list(limit).await?;
    Ok(items.into_iter().map(Company::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_company::partition::BANKRUPTCY_MARKER;

    #[test]
    fn test_model_from_row_builds_json_payload() {
        let row = vec![
            ("company_name".to_string(), Some("ООО Вектор".to_string())),
            ("region".to_string(), Some("Новосибирск".to_string())),
            ("industry".to_string(), Some("Retail".to_string())),
            (BANKRUPTCY_MARKER.to_string(), Some("Нет".to_string())),
            ("solvency_rank".to_string(), Some("2".to_string())),
        ];

        let model = model_from_row(&row).unwrap();
        assert_eq!(model.region.as_deref(), Some("Новосибирск"));

        let payload = model.bankruptcy_data.as_object().unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload["solvency_rank"], Value::String("2".into()));
        assert!(Uuid::parse_str(&model.id).is_ok());
    }

    #[test]
    fn test_model_from_row_propagates_partition_error() {
        let row = vec![
            ("company_name".to_string(), Some("A".to_string())),
            ("okved".to_string(), Some("62.01".to_string())),
            (BANKRUPTCY_MARKER.to_string(), None),
        ];

        assert!(matches!(
            model_from_row(&row),
            Err(PartitionError::UnexpectedColumn(col)) if col == "okved"
        ));
    }
}
