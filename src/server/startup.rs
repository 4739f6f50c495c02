use sea_orm::DatabaseConnection;
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, LockBackendKind},
    data::proposal_lock::DatabaseLockBackend,
    error::AppError,
    service::proposal::{lock::LockBackend, memory::MemoryLockBackend},
};

/// Seconds of inactivity before a website session expires.
const SESSION_MAX_AGE: i64 = 1_000_000;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the lock backend or
/// session store can use the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    tracing::info!("Creating database pool");

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The session table is created on first use.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to add to the HTTP router
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(SESSION_MAX_AGE))))
}

/// Builds the lock backend selected in configuration.
///
/// Every bot in the process must share the returned backend.
pub fn build_lock_backend(config: &Config, db: &DatabaseConnection) -> Arc<dyn LockBackend> {
    match config.lock_backend {
        LockBackendKind::Database => {
            tracing::info!("Using database proposal locks");
            Arc::new(DatabaseLockBackend::new(db.clone()))
        }
        LockBackendKind::Memory => {
            tracing::info!("Using in-memory proposal locks");
            Arc::new(MemoryLockBackend::new())
        }
    }
}
