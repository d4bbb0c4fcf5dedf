pub mod p101_common_info;
pub mod p102_financial_rollup;

/// Имена полей из `bankruptcy_data`, участвующих в расчёте агрегатов
pub mod fields {
    pub const PRE_TAX_PROFIT: &str = "pre_tax_profit";
    pub const CREDITOR_RETURN: &str = "creditor_return";
    pub const SOLVENCY_RANK: &str = "solvency_rank";
    pub const ROA_COEFFICIENT: &str = "roa_coefficient";
    pub const CURRENT_BUSINESS_VALUE: &str = "current_business_value";
    pub const LIQUIDATION_VALUE: &str = "liquidation_value";
    pub const WORKING_CAPITAL_NEEDS: &str = "working_capital_needs";
}
