pub mod a101_company_data;
pub mod p101_common_info;
pub mod p102_financial_rollup;
