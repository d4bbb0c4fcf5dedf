use anyhow::Result;
use sea_orm::{DatabaseTransaction, DbErr};

use super::{projection_builder, repository};
use crate::domain::a101_company::repository::Model as CompanyModel;

/// Пересчитать все три таблицы общей информации по текущему набору компаний
pub async fn rebuild_txn(
    txn: &DatabaseTransaction,
    companies: &[CompanyModel],
) -> Result<(), DbErr> {
    let by_region = projection_builder::build_by_region(companies);
    let by_county = projection_builder::build_by_county(companies);
    let by_industry = projection_builder::build_by_industry(companies);

    repository::replace_region_txn(txn, &by_region).await?;
    repository::replace_county_txn(txn, &by_county).await?;
    repository::replace_industry_txn(txn, &by_industry).await?;

    tracing::info!(
        "Common info rebuilt: {} regions, {} counties, {} industries",
        by_region.len(),
        by_county.len(),
        by_industry.len()
    );
    Ok(())
}

pub async fn list_by_region() -> Result<Vec<repository::region::Model>> {
    repository::list_region().await
}

pub async fn list_by_county() -> Result<Vec<repository::county::Model>> {
    repository::list_county().await
}

pub async fn list_by_industry() -> Result<Vec<repository::industry::Model>> {
    repository::list_industry().await
}
