use axum::http::StatusCode;
use axum::Json;

use crate::projections::p101_common_info::repository::{county, industry, region};
use crate::projections::p101_common_info::service;

/// GET /api/common-info/region
pub async fn list_by_region() -> Result<Json<Vec<region::Model>>, StatusCode> {
    match service::list_by_region().await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to list common info by region: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/common-info/county
pub async fn list_by_county() -> Result<Json<Vec<county::Model>>, StatusCode> {
    match service::list_by_county().await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to list common info by county: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/common-info/industry
pub async fn list_by_industry() -> Result<Json<Vec<industry::Model>>, StatusCode> {
    match service::list_by_industry().await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to list common info by industry: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
