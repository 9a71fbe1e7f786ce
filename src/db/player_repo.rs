use crate::db::error::{expect_deleted, QueryContext, StoreResult};
use crate::db::models::Player;
use sqlx::SqlitePool;

/// All players, alphabetical by name.
pub async fn list(db: &SqlitePool) -> StoreResult<Vec<Player>> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, name, height, weight, level, dob, notes, created_at, updated_at
             FROM players
            ORDER BY name"#,
    )
    .fetch_all(db)
    .await
    .context("list players")
}

pub async fn get(db: &SqlitePool, id: &str) -> StoreResult<Option<Player>> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, name, height, weight, level, dob, notes, created_at, updated_at
             FROM players
            WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("get player")
}

/// Insert or replace a player in one statement and return the stored row.
/// An existing `created_at` is never overwritten.
pub async fn upsert(db: &SqlitePool, p: &Player) -> StoreResult<Player> {
    sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (id, name, height, weight, level, dob, notes, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT (id) DO UPDATE
           SET name       = excluded.name,
               height     = excluded.height,
               weight     = excluded.weight,
               level      = excluded.level,
               dob        = excluded.dob,
               notes      = excluded.notes,
               updated_at = excluded.updated_at
        RETURNING id, name, height, weight, level, dob, notes, created_at, updated_at
        "#,
    )
    .bind(&p.id)
    .bind(&p.name)
    .bind(&p.height)
    .bind(&p.weight)
    .bind(&p.level)
    .bind(&p.dob)
    .bind(&p.notes)
    .bind(&p.created_at)
    .bind(&p.updated_at)
    .fetch_one(db)
    .await
    .context("upsert player")
}

/// Week plans and logs that point at this player are left alone.
pub async fn delete(db: &SqlitePool, id: &str) -> StoreResult<()> {
    let rows = sqlx::query("DELETE FROM players WHERE id = ?")
        .bind(id)
        .execute(db)
        .await
        .context("delete player")?
        .rows_affected();

    expect_deleted(rows, "player", id)
}
