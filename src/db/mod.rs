//! SQLite persistence: pool setup, schema bootstrap and per-table repositories.

pub mod error;
pub mod media_repo;
pub mod models;
pub mod player_log_repo;
pub mod player_repo;
pub mod setting_repo;
pub mod week_plan_repo;

pub use error::{StoreError, StoreResult};

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const SCHEMA: [&str; 5] = [
    r#"CREATE TABLE IF NOT EXISTS players (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        height TEXT,
        weight TEXT,
        level TEXT NOT NULL DEFAULT '',
        dob TEXT,
        notes TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS week_plans (
        id TEXT PRIMARY KEY,
        player_id TEXT NOT NULL,
        week TEXT NOT NULL,
        days TEXT NOT NULL DEFAULT '[]',
        total_rpe INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS media (
        id TEXT PRIMARY KEY,
        exercise_id TEXT NOT NULL,
        type TEXT NOT NULL,
        data TEXT NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS player_logs (
        id TEXT PRIMARY KEY,
        entries TEXT NOT NULL DEFAULT '[]',
        updated_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )"#,
];

/// Open (or create) the database file in WAL mode and make sure every table exists.
pub async fn open(path: &Path, max_connections: u32) -> anyhow::Result<SqlitePool> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating database directory {}", parent.display()))?;
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))
        .context("parsing database path")?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("opening database {}", path.display()))?;

    init_schema(&pool).await?;
    log::info!("database initialized at {}", path.display());
    Ok(pool)
}

/// Private in-memory database. A single connection is kept alive for the
/// lifetime of the pool since every new connection would see an empty database.
pub async fn open_in_memory() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .context("parsing in-memory database url")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("opening in-memory database")?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Create-if-absent for all five tables. Safe to run on every startup.
pub async fn init_schema(db: &SqlitePool) -> anyhow::Result<()> {
    for stmt in SCHEMA {
        sqlx::query(stmt)
            .execute(db)
            .await
            .with_context(|| format!("creating schema: {}", first_line(stmt)))?;
    }
    Ok(())
}

/// Cheap round-trip used by the health probe.
pub async fn ping(db: &SqlitePool) -> StoreResult<()> {
    sqlx::query("SELECT 1")
        .execute(db)
        .await
        .map_err(|source| StoreError::Query { op: "ping", source })?;
    Ok(())
}

fn first_line(stmt: &str) -> &str {
    stmt.lines().next().unwrap_or(stmt)
}
