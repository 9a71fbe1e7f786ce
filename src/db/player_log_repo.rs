//! Player logs are looked up and written by key only; there is no listing or delete.

use crate::db::error::{QueryContext, StoreResult};
use crate::db::models::PlayerLog;
use sqlx::SqlitePool;

pub async fn get(db: &SqlitePool, id: &str) -> StoreResult<Option<PlayerLog>> {
    sqlx::query_as::<_, PlayerLog>("SELECT id, entries, updated_at FROM player_logs WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
        .context("get player log")
}

pub async fn upsert(db: &SqlitePool, log: &PlayerLog) -> StoreResult<PlayerLog> {
    sqlx::query_as::<_, PlayerLog>(
        r#"
        INSERT INTO player_logs (id, entries, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT (id) DO UPDATE
           SET entries    = excluded.entries,
               updated_at = excluded.updated_at
        RETURNING id, entries, updated_at
        "#,
    )
    .bind(&log.id)
    .bind(&log.entries)
    .bind(&log.updated_at)
    .fetch_one(db)
    .await
    .context("upsert player log")
}
