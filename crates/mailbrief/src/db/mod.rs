//! Database module for persistent storage.
//!
//! Uses SeaORM over a pooled `DatabaseConnection`. SQLite and PostgreSQL
//! URLs are both accepted; the schema is brought up to date by
//! [`migrations::Migrator`] whenever a connection is opened.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

pub mod email_repo;
pub mod entities;
pub mod error;
pub mod migrations;

pub use email_repo::{EmailRepository, NewEmailSummary};
pub use entities::EmailSummary;
pub use error::DatabaseError;

use migrations::Migrator;

/// Connects to `url` and runs all pending migrations.
///
/// For file-backed SQLite URLs the parent directory is created first.
pub async fn init_database(
    url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DatabaseError> {
    if let Some(path) = sqlite_file_path(url) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut options = ConnectOptions::new(url.to_string());
    options
        .max_connections(max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let conn = Database::connect(options).await?;
    Migrator::up(&conn, None).await?;

    log::info!("Database ready ({})", backend_name(url));

    Ok(conn)
}

/// Opens a fresh in-memory SQLite database for tests. Runs all migrations.
///
/// The pool is pinned to a single connection so every query sees the same
/// in-memory database.
pub async fn init_in_memory() -> Result<DatabaseConnection, DatabaseError> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(Duration::from_secs(3600))
        .sqlx_logging(false);

    let conn = Database::connect(options).await?;
    Migrator::up(&conn, None).await?;
    Ok(conn)
}

/// Returns the canonical database URL:
/// `sqlite://~/.mailbrief/data/mailbrief.db?mode=rwc`.
pub fn default_database_url() -> String {
    let path = default_database_path().unwrap_or_else(|| PathBuf::from("mailbrief.db"));
    format!("sqlite://{}?mode=rwc", path.display())
}

/// Returns the canonical database path: `~/.mailbrief/data/mailbrief.db`.
pub fn default_database_path() -> Option<PathBuf> {
    crate::config::mailbrief_home().map(|h| h.join("data").join("mailbrief.db"))
}

/// File path of a SQLite URL, or `None` for in-memory and non-SQLite URLs.
fn sqlite_file_path(url: &str) -> Option<&Path> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(Path::new(path))
}

fn backend_name(url: &str) -> &'static str {
    if url.starts_with("sqlite:") {
        "sqlite"
    } else {
        "postgres"
    }
}
