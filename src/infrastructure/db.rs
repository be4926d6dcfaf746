//! SQLite connection pool setup and schema initialization.
//!
//! The pool is created once at startup by [`connect`], which also applies the
//! embedded, versioned migrations from `./migrations`. The resulting
//! [`SqlitePool`] is passed explicitly into [`crate::state::AppState`].
//!
//! ```rust,ignore
//! let pool = db::connect(&DatabaseConfig::new("books.sqlite")).await?;
//! ```

use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Versioned schema migrations embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `sqlite:` URL of the database.
    pub database_url: String,
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Connections are never recycled when `None`.
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl DatabaseConfig {
    /// Configuration for a database file at `path`. The file is created if missing.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::from_url(format!("sqlite:{}", path.as_ref().display()))
    }

    /// Configuration for an explicit `sqlite:` URL.
    pub fn from_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            min_connections: 1,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }

    /// Private in-memory database, used by tests.
    ///
    /// Each SQLite in-memory connection is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            min_connections: 1,
            max_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: None,
            max_lifetime: None,
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

/// Opens the pool without touching the schema.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the file cannot be opened.
pub async fn open(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_with(options)
        .await?;

    tracing::debug!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        "Database pool opened"
    );

    Ok(pool)
}

/// Applies pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails or the recorded schema history does
/// not match the embedded migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(
        version = ?latest_migration_version(),
        "Database schema is up to date"
    );
    Ok(())
}

/// Opens the pool and runs migrations. This is the startup entry point.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let pool = open(config).await?;
    migrate(&pool).await?;
    Ok(pool)
}

/// Highest migration version embedded in the binary.
pub fn latest_migration_version() -> Option<i64> {
    MIGRATOR.iter().map(|m| m.version).max()
}

/// Highest migration version applied to the database, if any.
///
/// # Errors
///
/// Returns an error if the migrations table exists but cannot be queried.
pub async fn applied_migration_version(pool: &SqlitePool) -> Result<Option<i64>, sqlx::Error> {
    let tables: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;

    if tables == 0 {
        return Ok(None);
    }

    sqlx::query_scalar("SELECT MAX(version) FROM _sqlx_migrations WHERE success = TRUE")
        .fetch_one(pool)
        .await
}

/// Cheap liveness probe.
///
/// # Errors
///
/// Returns the driver error if the database does not answer.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
