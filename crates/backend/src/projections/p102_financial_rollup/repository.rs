use anyhow::Result;
use sea_orm::{DatabaseTransaction, DbErr, EntityTrait, QueryOrder, Set};

use super::projection_builder::RollupRow;
use crate::shared::data::db::get_connection;

pub mod region_data {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "p102_region_data")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub region: String,
        pub total_business_value: i64,
        pub total_liquidation_value: i64,
        pub total_creditor_return: i64,
        pub total_working_capital_needs: i64,
        pub total_pre_tax_profit: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod county_data {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "p102_county_data")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub county: String,
        pub total_business_value: i64,
        pub total_liquidation_value: i64,
        pub total_creditor_return: i64,
        pub total_working_capital_needs: i64,
        pub total_pre_tax_profit: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Полная замена сумм по регионам; порядок строк входа сохраняется
/// через автоинкрементный id.
pub async fn replace_region_txn(
    txn: &DatabaseTransaction,
    rows: &[RollupRow],
) -> Result<(), DbErr> {
    region_data::Entity::delete_many().exec(txn).await?;
    if rows.is_empty() {
        return Ok(());
    }
    let models = rows.iter().map(|r| region_data::ActiveModel {
        region: Set(r.key.clone()),
        total_business_value: Set(r.total_business_value),
        total_liquidation_value: Set(r.total_liquidation_value),
        total_creditor_return: Set(r.total_creditor_return),
        total_working_capital_needs: Set(r.total_working_capital_needs),
        total_pre_tax_profit: Set(r.total_pre_tax_profit),
        ..Default::default()
    });
    region_data::Entity::insert_many(models).exec(txn).await?;
    Ok(())
}

/// Полная замена сумм по округам
pub async fn replace_county_txn(
    txn: &DatabaseTransaction,
    rows: &[RollupRow],
) -> Result<(), DbErr> {
    county_data::Entity::delete_many().exec(txn).await?;
    if rows.is_empty() {
        return Ok(());
    }
    let models = rows.iter().map(|r| county_data::ActiveModel {
        county: Set(r.key.clone()),
        total_business_value: Set(r.total_business_value),
        total_liquidation_value: Set(r.total_liquidation_value),
        total_creditor_return: Set(r.total_creditor_return),
        total_working_capital_needs: Set(r.total_working_capital_needs),
        total_pre_tax_profit: Set(r.total_pre_tax_profit),
        ..Default::default()
    });
    county_data::Entity::insert_many(models).exec(txn).await?;
    Ok(())
}

pub async fn list_region_data() -> Result<Vec<region_data::Model>> {
    let items = region_data::Entity::find()
        .order_by_asc(region_data::Column::Id)
        .all(get_connection())
        .await?;
    Ok(items)
}

pub async fn list_county_data() -> Result<Vec<county_data::Model>> {
    let items = county_data::Entity::find()
        .order_by_asc(county_data::Column::Id)
        .all(get_connection())
        .await?;
    Ok(items)
}
