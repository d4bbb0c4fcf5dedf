//! Суммы пяти финансовых показателей по регионам и округам.
//!
//! Каждая компания сначала сводится к пяти целым значениям (нечисловое
//! или отсутствующее — 0), затем значения суммируются по группам.
//! Округ вычисляется из региона компании до группировки, поэтому сумма
//! по округу всегда равна сумме его регионов.

use std::collections::BTreeMap;

use crate::domain::a101_company::repository::Model as CompanyModel;
use crate::projections::fields;
use crate::shared::numeric::parse_i64;
use crate::shared::regions::{county_of, county_priority, region_priority};

/// Суммы одной группы (регион или округ)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollupRow {
    pub key: String,
    pub total_business_value: i64,
    pub total_liquidation_value: i64,
    pub total_creditor_return: i64,
    pub total_working_capital_needs: i64,
    pub total_pre_tax_profit: i64,
}

/// Пять финансовых значений одной компании после мягкой коэрции
#[derive(Debug, Clone, Copy, Default)]
struct CompanyFinancials {
    business_value: i64,
    liquidation_value: i64,
    creditor_return: i64,
    working_capital_needs: i64,
    pre_tax_profit: i64,
}

fn financials_of(company: &CompanyModel) -> CompanyFinancials {
    let value = |name: &str| parse_i64(company.bankruptcy_data.get(name)).unwrap_or(0);

    CompanyFinancials {
        business_value: value(fields::CURRENT_BUSINESS_VALUE),
        liquidation_value: value(fields::LIQUIDATION_VALUE),
        creditor_return: value(fields::CREDITOR_RETURN),
        working_capital_needs: value(fields::WORKING_CAPITAL_NEEDS),
        pre_tax_profit: value(fields::PRE_TAX_PROFIT),
    }
}

fn build<F, P>(companies: &[CompanyModel], key_of: F, priority_of: P) -> Vec<RollupRow>
where
    F: Fn(&CompanyModel) -> String,
    P: Fn(&str) -> u8,
{
    let mut groups: BTreeMap<String, RollupRow> = BTreeMap::new();

    for company in companies {
        let key = key_of(company);
        let fin = financials_of(company);
        let row = groups.entry(key.clone()).or_insert_with(|| RollupRow {
            key,
            ..Default::default()
        });

        row.total_business_value += fin.business_value;
        row.total_liquidation_value += fin.liquidation_value;
        row.total_creditor_return += fin.creditor_return;
        row.total_working_capital_needs += fin.working_capital_needs;
        row.total_pre_tax_profit += fin.pre_tax_profit;
    }

    // Стабильная сортировка: внутри одного приоритета сохраняется
    // алфавитный порядок ключей из BTreeMap
    let mut rows: Vec<RollupRow> = groups.into_values().collect();
    rows.sort_by_key(|r| priority_of(&r.key));
    rows
}

pub fn build_by_region(companies: &[CompanyModel]) -> Vec<RollupRow> {
    build(
        companies,
        |c| c.region.clone().unwrap_or_default(),
        region_priority,
    )
}

pub fn build_by_county(companies: &[CompanyModel]) -> Vec<RollupRow> {
    build(
        companies,
        |c| county_of(c.region.as_deref().unwrap_or_default()).to_string(),
        county_priority,
    )
}
