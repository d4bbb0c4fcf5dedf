use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A101 Company data: загрузка CSV и список компаний
        .route(
            "/api/company-data/upload-csv",
            post(handlers::a101_company_data::upload_csv),
        )
        .route(
            "/api/company-data",
            get(handlers::a101_company_data::list),
        )
        // P101 Common info: счётчики по регионам, округам и отраслям
        .route(
            "/api/common-info/region",
            get(handlers::p101_common_info::list_by_region),
        )
        .route(
            "/api/common-info/county",
            get(handlers::p101_common_info::list_by_county),
        )
        .route(
            "/api/common-info/industry",
            get(handlers::p101_common_info::list_by_industry),
        )
        // P102 Financial rollup: суммы финансовых показателей
        .route(
            "/api/region-data",
            get(handlers::p102_financial_rollup::list_region_data),
        )
        .route(
            "/api/county-data",
            get(handlers::p102_financial_rollup::list_county_data),
        )
}
