use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// DDL всех таблиц сервиса. Таблица компаний хранит сырые реквизиты плюс
/// JSON с полями банкротства; остальные пять — производные агрегаты,
/// полностью перестраиваемые при каждой загрузке.
const TABLES: &[(&str, &str)] = &[
    (
        "a101_company_data",
        r#"
        CREATE TABLE a101_company_data (
            id TEXT PRIMARY KEY NOT NULL,
            company_name TEXT,
            region TEXT,
            industry TEXT,
            bankruptcy_data TEXT NOT NULL DEFAULT '{}'
        );
    "#,
    ),
    (
        "p101_common_info_region",
        r#"
        CREATE TABLE p101_common_info_region (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            region TEXT NOT NULL UNIQUE,
            total_companies INTEGER NOT NULL,
            profitable_companies INTEGER NOT NULL,
            debt_free_companies INTEGER NOT NULL,
            solvent_companies INTEGER NOT NULL,
            roa_companies INTEGER NOT NULL
        );
    "#,
    ),
    (
        "p101_common_info_county",
        r#"
        CREATE TABLE p101_common_info_county (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            county TEXT NOT NULL UNIQUE,
            total_companies INTEGER NOT NULL,
            profitable_companies INTEGER NOT NULL,
            debt_free_companies INTEGER NOT NULL,
            solvent_companies INTEGER NOT NULL,
            roa_companies INTEGER NOT NULL
        );
    "#,
    ),
    (
        "p101_common_info_industry",
        r#"
        CREATE TABLE p101_common_info_industry (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            industry TEXT NOT NULL UNIQUE,
            total_companies INTEGER NOT NULL,
            profitable_companies INTEGER NOT NULL,
            debt_free_companies INTEGER NOT NULL,
            solvent_companies INTEGER NOT NULL,
            roa_companies INTEGER NOT NULL
        );
    "#,
    ),
    (
        "p102_region_data",
        r#"
        CREATE TABLE p102_region_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            region TEXT NOT NULL UNIQUE,
            total_business_value INTEGER NOT NULL,
            total_liquidation_value INTEGER NOT NULL,
            total_creditor_return INTEGER NOT NULL,
            total_working_capital_needs INTEGER NOT NULL,
            total_pre_tax_profit INTEGER NOT NULL
        );
    "#,
    ),
    (
        "p102_county_data",
        r#"
        CREATE TABLE p102_county_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            county TEXT NOT NULL UNIQUE,
            total_business_value INTEGER NOT NULL,
            total_liquidation_value INTEGER NOT NULL,
            total_creditor_return INTEGER NOT NULL,
            total_working_capital_needs INTEGER NOT NULL,
            total_pre_tax_profit INTEGER NOT NULL
        );
    "#,
    ),
];

/// Создаёт недостающие таблицы (minimal schema bootstrap).
///
/// Выделено из `initialize_database`, чтобы тесты могли поднимать схему
/// на собственном in-memory подключении.
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, ddl) in TABLES {
        let check = format!(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
            table
        );
        let existing = conn
            .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
            .await?;

        if existing.is_empty() {
            tracing::info!("Creating {} table", table);
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                ddl.to_string(),
            ))
            .await?;
        }
    }
    Ok(())
}

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/companies.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
