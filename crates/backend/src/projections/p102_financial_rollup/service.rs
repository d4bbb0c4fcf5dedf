use anyhow::Result;
use sea_orm::{DatabaseTransaction, DbErr};

use super::{projection_builder, repository};
use crate::domain::a101_company::repository::Model as CompanyModel;

/// Пересчитать суммы финансовых показателей: сначала регионы, затем округа
pub async fn rebuild_txn(
    txn: &DatabaseTransaction,
    companies: &[CompanyModel],
) -> Result<(), DbErr> {
    let by_region = projection_builder::build_by_region(companies);
    let by_county = projection_builder::build_by_county(companies);

    repository::replace_region_txn(txn, &by_region).await?;
    repository::replace_county_txn(txn, &by_county).await?;

    tracing::info!(
        "Financial rollup rebuilt: {} regions, {} counties",
        by_region.len(),
        by_county.len()
    );
    Ok(())
}

pub async fn list_region_data() -> Result<Vec<repository::region_data::Model>> {
    repository::list_region_data().await
}

pub async fn list_county_data() -> Result<Vec<repository::county_data::Model>> {
    repository::list_county_data().await
}
