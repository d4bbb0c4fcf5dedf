use serde::{Deserialize, Serialize};

/// Ответ на загрузку CSV файла с данными компаний
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Количество загруженных компаний
    pub loaded_count: u64,

    /// Сообщение для пользователя
    pub message: String,
}

impl UploadResponse {
    pub fn new(loaded_count: u64) -> Self {
        Self {
            loaded_count,
            message: format!("Successfully uploaded {} records", loaded_count),
        }
    }
}
