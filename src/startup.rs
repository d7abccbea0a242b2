use crate::{
    config::Config,
    error::{config::ConfigError, gacha::GachaError, AppError},
    gacha::rank::RankTable,
};

/// Initializes the tracing subscriber for structured logging.
///
/// Respects `RUST_LOG` when set, defaulting to `info` otherwise. Called once
/// at process startup before anything else logs.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// database schema is up-to-date. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads the rank table, from file when configured or the built-in defaults.
///
/// When `RANK_TABLE_PATH` is set the file is read and parsed as a JSON array of
/// rank config entries; a malformed or incomplete table is a startup failure
/// rather than something to fall back from, since draw weights and CP ranges
/// must never silently change shape.
///
/// # Arguments
/// - `config` - Application configuration with the optional rank table path
///
/// # Returns
/// - `Ok(RankTable)` - Validated rank table ready for use
/// - `Err(AppError::ConfigErr)` - Rank table file could not be read
/// - `Err(AppError::GachaErr)` - Rank table contents failed validation
pub fn load_rank_table(config: &Config) -> Result<RankTable, AppError> {
    match &config.rank_table_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::RankTableIo {
                path: path.clone(),
                source,
            })?;
            let table = RankTable::from_json_str(&raw).map_err(GachaError::from)?;

            tracing::info!("Loaded rank table from {}", path);

            Ok(table)
        }
        None => Ok(RankTable::default()),
    }
}
