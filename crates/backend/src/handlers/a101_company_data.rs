use axum::extract::{Multipart, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a101_company::Company;
use contracts::usecases::u101_upload_company_csv::UploadResponse;
use serde::Deserialize;

use crate::domain::a101_company::service;
use crate::shared::data::db::get_connection;
use crate::usecases::u101_upload_company_csv::{csv_reader, executor, UploadError};

fn processing_error(e: UploadError) -> (StatusCode, String) {
    tracing::error!("Error processing CSV file: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error processing CSV file: {}", e),
    )
}

/// POST /api/company-data/upload-csv
///
/// Принимает CSV файл (multipart поле "file"), полностью заменяет набор
/// компаний и пересчитывает агрегаты. Неверный тип файла — 400 ещё до
/// разбора содержимого.
pub async fn upload_csv(
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), (StatusCode, String)> {
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read file: {}", e)))?;
            file = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let Some((filename, bytes)) = file else {
        return Err((
            StatusCode::BAD_REQUEST,
            "Form field 'file' is missing".to_string(),
        ));
    };

    tracing::info!("Starting CSV upload process for file: {}", filename);

    if !filename.to_lowercase().ends_with(".csv") {
        tracing::error!("Rejected upload of non-CSV file: {}", filename);
        return Err((StatusCode::BAD_REQUEST, "File must be a CSV".to_string()));
    }

    let text = String::from_utf8_lossy(&bytes);
    let rows = match csv_reader::parse_csv_text(&text) {
        Ok(rows) => rows,
        Err(e) => return Err(processing_error(UploadError::Csv(e))),
    };

    match executor::run_upload(get_connection(), rows).await {
        Ok(count) => {
            tracing::info!("Successfully uploaded {} records", count);
            Ok((StatusCode::CREATED, Json(UploadResponse::new(count))))
        }
        Err(e) => Err(processing_error(e)),
    }
}

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<u64>,
}

/// GET /api/company-data
pub async fn list(Query(params): Query<ListParams>) -> Result<Json<Vec<Company>>, StatusCode> {
    match service::list(params.limit).await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to list companies: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
