use anyhow::Result;
use contracts::domain::a101_company::{Company, CompanyId};
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseTransaction, DbErr, EntityTrait, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use serde_json::Map;
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a101_company_data")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub company_name: Option<String>,
    pub region: Option<String>,
    pub industry: Option<String>,

    /// Показатели банкротства в порядке колонок исходного файла
    pub bankruptcy_data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Company {
    fn from(m: Model) -> Self {
        let bankruptcy_data = match m.bankruptcy_data {
            serde_json::Value::Object(map) => map,
            _ => Map::new(),
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Company {
            id: CompanyId::new(uuid),
            company_name: m.company_name,
            region: m.region,
            industry: m.industry,
            bankruptcy_data,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(entry: Model) -> ActiveModel {
    ActiveModel {
        id: Set(entry.id),
        company_name: Set(entry.company_name),
        region: Set(entry.region),
        industry: Set(entry.industry),
        bankruptcy_data: Set(entry.bankruptcy_data),
    }
}

/// Удаляет все компании. Вызывается только внутри транзакции загрузки.
pub async fn clear_all_txn(txn: &DatabaseTransaction) -> Result<u64, DbErr> {
    let result = Entity::delete_many().exec(txn).await?;
    Ok(result.rows_affected)
}

/// Вставляет одну компанию. Уникальность имён/регионов не требуется,
/// id генерируется на стороне сервиса.
pub async fn insert_txn(txn: &DatabaseTransaction, entry: Model) -> Result<(), DbErr> {
    Entity::insert(to_active(entry)).exec(txn).await?;
    Ok(())
}

/// Все компании в рамках транзакции загрузки — вход пересчёта агрегатов.
pub async fn list_all_txn(txn: &DatabaseTransaction) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(txn).await
}

pub async fn list(limit: Option<u64>) -> Result<Vec<Model>> {
    let mut query = Entity::find();
    if let Some(lim) = limit {
        query = query.limit(lim);
    }
    let items = query.all(conn()).await?;
    Ok(items)
}
