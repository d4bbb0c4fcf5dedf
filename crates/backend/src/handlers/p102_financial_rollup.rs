use axum::http::StatusCode;
use axum::Json;

use crate::projections::p102_financial_rollup::repository::{county_data, region_data};
use crate::projections::p102_financial_rollup::service;

/// GET /api/region-data
pub async fn list_region_data() -> Result<Json<Vec<region_data::Model>>, StatusCode> {
    match service::list_region_data().await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to list region data: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/county-data
pub async fn list_county_data() -> Result<Json<Vec<county_data::Model>>, StatusCode> {
    match service::list_county_data().await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to list county data: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
