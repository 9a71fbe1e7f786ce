use crate::db::error::{expect_deleted, QueryContext, StoreResult};
use crate::db::models::Media;
use sqlx::SqlitePool;

/// Newest first.
pub async fn list(db: &SqlitePool) -> StoreResult<Vec<Media>> {
    sqlx::query_as::<_, Media>(
        r#"SELECT id, exercise_id, type, data, name, created_at
             FROM media
            ORDER BY created_at DESC"#,
    )
    .fetch_all(db)
    .await
    .context("list media")
}

pub async fn get(db: &SqlitePool, id: &str) -> StoreResult<Option<Media>> {
    sqlx::query_as::<_, Media>(
        r#"SELECT id, exercise_id, type, data, name, created_at
             FROM media
            WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("get media")
}

pub async fn upsert(db: &SqlitePool, m: &Media) -> StoreResult<Media> {
    sqlx::query_as::<_, Media>(
        r#"
        INSERT INTO media (id, exercise_id, type, data, name, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT (id) DO UPDATE
           SET exercise_id = excluded.exercise_id,
               type        = excluded.type,
               data        = excluded.data,
               name        = excluded.name
        RETURNING id, exercise_id, type, data, name, created_at
        "#,
    )
    .bind(&m.id)
    .bind(&m.exercise_id)
    .bind(&m.media_type)
    .bind(&m.data)
    .bind(&m.name)
    .bind(&m.created_at)
    .fetch_one(db)
    .await
    .context("upsert media")
}

pub async fn delete(db: &SqlitePool, id: &str) -> StoreResult<()> {
    let rows = sqlx::query("DELETE FROM media WHERE id = ?")
        .bind(id)
        .execute(db)
        .await
        .context("delete media")?
        .rows_affected();

    expect_deleted(rows, "media", id)
}
