use anyhow::Result;
use sea_orm::{DatabaseTransaction, DbErr, EntityTrait, QueryOrder, Set};

use super::projection_builder::CommonInfoRow;
use crate::shared::data::db::get_connection;

pub mod region {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "p101_common_info_region")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub region: String,
        pub total_companies: i64,
        pub profitable_companies: i64,
        pub debt_free_companies: i64,
        pub solvent_companies: i64,
        pub roa_companies: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod county {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "p101_common_info_county")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub county: String,
        pub total_companies: i64,
        pub profitable_companies: i64,
        pub debt_free_companies: i64,
        pub solvent_companies: i64,
        pub roa_companies: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod industry {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "p101_common_info_industry")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub industry: String,
        pub total_companies: i64,
        pub profitable_companies: i64,
        pub debt_free_companies: i64,
        pub solvent_companies: i64,
        pub roa_companies: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Полная замена таблицы счётчиков по регионам
pub async fn replace_region_txn(
    txn: &DatabaseTransaction,
    rows: &[CommonInfoRow],
) -> Result<(), DbErr> {
    region::Entity::delete_many().exec(txn).await?;
    if rows.is_empty() {
        return Ok(());
    }
    let models = rows.iter().map(|r| region::ActiveModel {
        region: Set(r.key.clone()),
        total_companies: Set(r.total_companies),
        profitable_companies: Set(r.profitable_companies),
        debt_free_companies: Set(r.debt_free_companies),
        solvent_companies: Set(r.solvent_companies),
        roa_companies: Set(r.roa_companies),
        ..Default::default()
    });
    region::Entity::insert_many(models).exec(txn).await?;
    Ok(())
}

/// Полная замена таблицы счётчиков по округам
pub async fn replace_county_txn(
    txn: &DatabaseTransaction,
    rows: &[CommonInfoRow],
) -> Result<(), DbErr> {
    county::Entity::delete_many().exec(txn).await?;
    if rows.is_empty() {
        return Ok(());
    }
    let models = rows.iter().map(|r| county::ActiveModel {
        county: Set(r.key.clone()),
        total_companies: Set(r.total_companies),
        profitable_companies: Set(r.profitable_companies),
        debt_free_companies: Set(r.debt_free_companies),
        solvent_companies: Set(r.solvent_companies),
        roa_companies: Set(r.roa_companies),
        ..Default::default()
    });
    county::Entity::insert_many(models).exec(txn).await?;
    Ok(())
}

/// Полная замена таблицы счётчиков по отраслям
pub async fn replace_industry_txn(
    txn: &DatabaseTransaction,
    rows: &[CommonInfoRow],
) -> Result<(), DbErr> {
    industry::Entity::delete_many().exec(txn).await?;
    if rows.is_empty() {
        return Ok(());
    }
    let models = rows.iter().map(|r| industry::ActiveModel {
        industry: Set(r.key.clone()),
        total_companies: Set(r.total_companies),
        profitable_companies: Set(r.profitable_companies),
        debt_free_companies: Set(r.debt_free_companies),
        solvent_companies: Set(r.solvent_companies),
        roa_companies: Set(r.roa_companies),
        ..Default::default()
    });
    industry::Entity::insert_many(models).exec(txn).await?;
    Ok(())
}

pub async fn list_region() -> Result<Vec<region::Model>> {
    let items = region::Entity::find()
        .order_by_asc(region::Column::Id)
        .all(get_connection())
        .await?;
    Ok(items)
}

pub async fn list_county() -> Result<Vec<county::Model>> {
    let items = county::Entity::find()
        .order_by_asc(county::Column::Id)
        .all(get_connection())
        .await?;
    Ok(items)
}

pub async fn list_industry() -> Result<Vec<industry::Model>> {
    let items = industry::Entity::find()
        .order_by_asc(industry::Column::Id)
        .all(get_connection())
        .await?;
    Ok(items)
}
