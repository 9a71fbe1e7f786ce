use crate::db::error::{QueryContext, StoreResult};
use crate::db::models::Setting;
use sqlx::SqlitePool;

pub async fn get(db: &SqlitePool, key: &str) -> StoreResult<Option<Setting>> {
    sqlx::query_as::<_, Setting>("SELECT key, value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(db)
        .await
        .context("get setting")
}

pub async fn upsert(db: &SqlitePool, s: &Setting) -> StoreResult<Setting> {
    sqlx::query_as::<_, Setting>(
        r#"
        INSERT INTO settings (key, value)
        VALUES (?, ?)
        ON CONFLICT (key) DO UPDATE SET value = excluded.value
        RETURNING key, value
        "#,
    )
    .bind(&s.key)
    .bind(&s.value)
    .fetch_one(db)
    .await
    .context("upsert setting")
}
