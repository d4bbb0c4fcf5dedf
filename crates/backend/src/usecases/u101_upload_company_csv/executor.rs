//! Оркестратор загрузки: очистка, загрузка компаний и пересчёт всех
//! агрегатов как одна транзакция.

use once_cell::sync::Lazy;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::sync::Mutex;

use super::csv_reader::RawRow;
use super::error::UploadError;
use crate::domain::a101_company::{repository as company_repository, service as company_service};
use crate::projections::{p101_common_info, p102_financial_rollup};

/// Загрузки сериализуются: вторая, начавшаяся до коммита первой, увидела
/// бы наполовину перестроенные агрегаты. Изоляции одной SQLite транзакции
/// для этого недостаточно.
static UPLOAD_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Полный цикл загрузки набора компаний:
/// очистка -> загрузка строк по порядку -> суммы по регионам и округам ->
/// общая информация по регионам, округам и отраслям -> commit.
///
/// Любая ошибка до коммита откатывает транзакцию целиком; загрузка нуля
/// строк — не ошибка, она просто опустошает все таблицы.
/// Возвращает количество загруженных компаний.
pub async fn run_upload(db: &DatabaseConnection, rows: Vec<RawRow>) -> Result<u64, UploadError> {
    let _guard = UPLOAD_LOCK.lock().await;
    let started_at = std::time::Instant::now();

    let mut companies = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let model = company_service::model_from_row(row)
            .map_err(|source| UploadError::Partition { row: idx + 1, source })?;
        companies.push(model);
    }

    let txn = db.begin().await?;

    let loaded = company_service::replace_all_txn(&txn, companies).await?;

    let current = company_repository::list_all_txn(&txn).await?;
    p102_financial_rollup::service::rebuild_txn(&txn, &current).await?;
    p101_common_info::service::rebuild_txn(&txn, &current).await?;

    txn.commit().await?;

    tracing::info!(
        "Upload finished: loaded_count={}, elapsed_ms={}",
        loaded,
        started_at.elapsed().as_millis()
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_company::partition::BANKRUPTCY_MARKER;
    use crate::projections::p101_common_info::repository::{county, industry, region};
    use crate::projections::p102_financial_rollup::repository::{county_data, region_data};
    use crate::shared::data::db::bootstrap_schema;
    use crate::usecases::u101_upload_company_csv::csv_reader::parse_csv_text;
    use sea_orm::{ConnectOptions, Database, EntityTrait, PaginatorTrait, QueryOrder};

    async fn test_db() -> DatabaseConnection {
        // Одно соединение: каждый коннект к sqlite::memory: открывает
        // отдельную пустую базу
        let mut options = ConnectOptions::new("sqlite::memory:".to_string());
        options.max_connections(1);
        let conn = Database::connect(options).await.unwrap();
        bootstrap_schema(&conn).await.unwrap();
        conn
    }

    fn sample_csv() -> String {
        format!(
            "company_name,region,industry,{},pre_tax_profit,creditor_return\n\
             Тест 1,Москва,IT,Да,100,0\n\
             Тест 2,СПб,IT,Нет,-5,0\n",
            BANKRUPTCY_MARKER
        )
    }

    #[tokio::test]
    async fn test_upload_builds_all_aggregates_for_sample_dataset() {
        let db = test_db().await;
        let rows = parse_csv_text(&sample_csv()).unwrap();

        let loaded = run_upload(&db, rows).await.unwrap();
        assert_eq!(loaded, 2);

        // Сумма по регионам равна числу загруженных строк
        let region_info = region::Entity::find().all(&db).await.unwrap();
        let total: i64 = region_info.iter().map(|r| r.total_companies).sum();
        assert_eq!(total, 2);

        let it = industry::Entity::find().all(&db).await.unwrap();
        assert_eq!(it.len(), 1);
        assert_eq!(it[0].industry, "IT");
        assert_eq!(it[0].total_companies, 2);
        assert_eq!(it[0].profitable_companies, 1);
        assert_eq!(it[0].debt_free_companies, 2);

        // Суммы по регионам в фиксированном порядке: Москва, СПб
        let rollup = region_data::Entity::find()
            .order_by_asc(region_data::Column::Id)
            .all(&db)
            .await
            .unwrap();
        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].region, "Москва");
        assert_eq!(rollup[0].total_pre_tax_profit, 100);
        assert_eq!(rollup[1].region, "СПб");
        assert_eq!(rollup[1].total_pre_tax_profit, -5);

        // Округа не сливаются: Москва и СПб дают разные округа
        let county_rollup = county_data::Entity::find()
            .order_by_asc(county_data::Column::Id)
            .all(&db)
            .await
            .unwrap();
        assert_eq!(county_rollup[0].county, "Центральный");
        assert_eq!(county_rollup[0].total_pre_tax_profit, 100);
        assert_eq!(county_rollup[1].county, "Северо-Западный");
        assert_eq!(county_rollup[1].total_pre_tax_profit, -5);
    }

    #[tokio::test]
    async fn test_second_upload_fully_replaces_first() {
        let db = test_db().await;

        let rows = parse_csv_text(&sample_csv()).unwrap();
        run_upload(&db, rows.clone()).await.unwrap();
        run_upload(&db, rows).await.unwrap();

        let companies = company_repository::Entity::find().count(&db).await.unwrap();
        assert_eq!(companies, 2);

        let region_info = region::Entity::find().all(&db).await.unwrap();
        let total: i64 = region_info.iter().map(|r| r.total_companies).sum();
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn test_zero_rows_clears_everything_and_returns_zero() {
        let db = test_db().await;

        let rows = parse_csv_text(&sample_csv()).unwrap();
        run_upload(&db, rows).await.unwrap();

        let loaded = run_upload(&db, Vec::new()).await.unwrap();
        assert_eq!(loaded, 0);

        assert_eq!(
            company_repository::Entity::find().count(&db).await.unwrap(),
            0
        );
        assert_eq!(region::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(county::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(industry::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(region_data::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(county_data::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_upload_leaves_previous_state_intact() {
        let db = test_db().await;

        let rows = parse_csv_text(&sample_csv()).unwrap();
        run_upload(&db, rows).await.unwrap();

        // Колонка inn до маркера не является реквизитом компании
        let bad_csv = format!(
            "company_name,inn,region,{}\nПлохая,123,Москва,Да\n",
            BANKRUPTCY_MARKER
        );
        let bad_rows = parse_csv_text(&bad_csv).unwrap();
        let err = run_upload(&db, bad_rows).await.unwrap_err();
        assert!(matches!(err, UploadError::Partition { row: 1, .. }));

        // Предыдущая загрузка не тронута
        assert_eq!(
            company_repository::Entity::find().count(&db).await.unwrap(),
            2
        );
        let rollup = region_data::Entity::find().all(&db).await.unwrap();
        assert_eq!(rollup.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_numeric_values_do_not_abort_upload() {
        let db = test_db().await;

        let csv_text = format!(
            "company_name,region,industry,{},pre_tax_profit,roa_coefficient\n\
             Тест,Москва,IT,Да,не число,0;3\n",
            BANKRUPTCY_MARKER
        );
        let rows = parse_csv_text(&csv_text).unwrap();

        let loaded = run_upload(&db, rows).await.unwrap();
        assert_eq!(loaded, 1);

        let region_info = region::Entity::find().all(&db).await.unwrap();
        assert_eq!(region_info[0].total_companies, 1);
        assert_eq!(region_info[0].profitable_companies, 0);
        assert_eq!(region_info[0].roa_companies, 0);

        let rollup = region_data::Entity::find().all(&db).await.unwrap();
        assert_eq!(rollup[0].total_pre_tax_profit, 0);
    }
}
