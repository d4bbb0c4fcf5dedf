use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор компании
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub Uuid);

impl CompanyId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CompanyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Компания из загруженного CSV файла.
///
/// Поля до маркерной колонки («возбуждено производство по делу о
/// несостоятельности (банкротстве)») — основные реквизиты; сама маркерная
/// колонка и всё после неё сохраняется в `bankruptcy_data` с исходным
/// порядком колонок.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,

    pub company_name: Option<String>,
    pub region: Option<String>,
    pub industry: Option<String>,

    /// Финансовые показатели банкротства, ключи в порядке колонок файла.
    /// Пустой объект означает, что маркерная колонка в файле отсутствовала.
    pub bankruptcy_data: Map<String, Value>,
}
