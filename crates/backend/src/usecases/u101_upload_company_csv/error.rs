use thiserror::Error;

use crate::domain::a101_company::partition::PartitionError;

/// Ошибки загрузки CSV. Любая из них откатывает загрузку целиком:
/// частично загруженных компаний или агрегатов не бывает.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Номер строки файла (с единицы, без учёта заголовка)
    #[error("row {row}: {source}")]
    Partition {
        row: usize,
        source: PartitionError,
    },

    #[error("storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),
}
