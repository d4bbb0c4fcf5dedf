//! Счётчики «общей информации» по регионам, округам и отраслям.
//!
//! Один проход группировки по полному набору компаний: набор данных
//! при каждой загрузке заменяется целиком, поэтому инкрементальное
//! обновление счётчиков не имеет смысла.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::a101_company::repository::Model as CompanyModel;
use crate::projections::fields;
use crate::shared::numeric::{parse_f64, parse_i64};
use crate::shared::regions::county_of;

/// Счётчики одной группы (регион / округ / отрасль)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonInfoRow {
    pub key: String,
    pub total_companies: i64,
    pub profitable_companies: i64,
    pub debt_free_companies: i64,
    pub solvent_companies: i64,
    pub roa_companies: i64,
}

fn field<'a>(company: &'a CompanyModel, name: &str) -> Option<&'a Value> {
    company.bankruptcy_data.get(name)
}

/// Нечисловое или отсутствующее значение не проходит ни один предикат —
/// компания просто не попадает в соответствующий счётчик.
fn build<F>(companies: &[CompanyModel], key_of: F) -> Vec<CommonInfoRow>
where
    F: Fn(&CompanyModel) -> String,
{
    let mut groups: BTreeMap<String, CommonInfoRow> = BTreeMap::new();

    for company in companies {
        let key = key_of(company);
        let row = groups.entry(key.clone()).or_insert_with(|| CommonInfoRow {
            key,
            ..Default::default()
        });

        row.total_companies += 1;
        if parse_i64(field(company, fields::PRE_TAX_PROFIT)).map_or(false, |v| v > 0) {
            row.profitable_companies += 1;
        }
        if parse_i64(field(company, fields::CREDITOR_RETURN)) == Some(0) {
            row.debt_free_companies += 1;
        }
        if parse_i64(field(company, fields::SOLVENCY_RANK)).map_or(false, |v| v > 0) {
            row.solvent_companies += 1;
        }
        if parse_f64(field(company, fields::ROA_COEFFICIENT)).map_or(false, |v| v != 0.0) {
            row.roa_companies += 1;
        }
    }

    groups.into_values().collect()
}

pub fn build_by_region(companies: &[CompanyModel]) -> Vec<CommonInfoRow> {
    build(companies, |c| c.region.clone().unwrap_or_default())
}

pub fn build_by_county(companies: &[CompanyModel]) -> Vec<CommonInfoRow> {
    build(companies, |c| {
        county_of(c.region.as_deref().unwrap_or_default()).to_string()
    })
}

pub fn build_by_industry(companies: &[CompanyModel]) -> Vec<CommonInfoRow> {
    build(companies, |c| c.industry.clone().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn company(region: &str, industry: &str, payload: Value) -> CompanyModel {
        CompanyModel {
            id: Uuid::new_v4().to_string(),
            company_name: Some("test".to_string()),
            region: Some(region.to_string()),
            industry: Some(industry.to_string()),
            bankruptcy_data: payload,
        }
    }

    #[test]
    fn test_counts_follow_financial_predicates() {
        let companies = vec![
            company(
                "Москва",
                "IT",
                json!({"pre_tax_profit": "100", "creditor_return": "0", "solvency_rank": "1", "roa_coefficient": "0,3"}),
            ),
            company(
                "Москва",
                "IT",
                json!({"pre_tax_profit": "-5", "creditor_return": "10", "solvency_rank": "0", "roa_coefficient": "0"}),
            ),
        ];

        let rows = build_by_region(&companies);
        assert_eq!(rows.len(), 1);
        let moscow = &rows[0];
        assert_eq!(moscow.key, "Москва");
        assert_eq!(moscow.total_companies, 2);
        assert_eq!(moscow.profitable_companies, 1);
        assert_eq!(moscow.debt_free_companies, 1);
        assert_eq!(moscow.solvent_companies, 1);
        assert_eq!(moscow.roa_companies, 1);
    }

    #[test]
    fn test_garbage_values_count_as_false() {
        let companies = vec![company(
            "СПб",
            "IT",
            json!({"pre_tax_profit": "много", "creditor_return": null, "roa_coefficient": "n/a"}),
        )];

        let rows = build_by_region(&companies);
        assert_eq!(rows[0].total_companies, 1);
        assert_eq!(rows[0].profitable_companies, 0);
        assert_eq!(rows[0].debt_free_companies, 0);
        assert_eq!(rows[0].solvent_companies, 0);
        assert_eq!(rows[0].roa_companies, 0);
    }

    #[test]
    fn test_county_grouping_merges_unknown_regions() {
        let companies = vec![
            company("Москва", "IT", json!({})),
            company("Тверь", "IT", json!({})),
            company("Казань", "IT", json!({})),
        ];

        let rows = build_by_county(&companies);
        let other = rows.iter().find(|r| r.key == "Другой").unwrap();
        assert_eq!(other.total_companies, 2);
        let central = rows.iter().find(|r| r.key == "Центральный").unwrap();
        assert_eq!(central.total_companies, 1);
    }

    #[test]
    fn test_industry_grouping_totals_match_input() {
        let companies = vec![
            company("Москва", "IT", json!({})),
            company("СПб", "IT", json!({})),
            company("СПб", "Manufacturing", json!({})),
        ];

        let rows = build_by_industry(&companies);
        let total: i64 = rows.iter().map(|r| r.total_companies).sum();
        assert_eq!(total, companies.len() as i64);
    }
}
