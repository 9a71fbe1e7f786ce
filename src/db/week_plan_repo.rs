use crate::db::error::{expect_deleted, QueryContext, StoreResult};
use crate::db::models::WeekPlan;
use sqlx::SqlitePool;

/// Newest first.
pub async fn list(db: &SqlitePool) -> StoreResult<Vec<WeekPlan>> {
    sqlx::query_as::<_, WeekPlan>(
        r#"SELECT id, player_id, week, days, total_rpe, created_at
             FROM week_plans
            ORDER BY created_at DESC"#,
    )
    .fetch_all(db)
    .await
    .context("list week plans")
}

pub async fn get(db: &SqlitePool, id: &str) -> StoreResult<Option<WeekPlan>> {
    sqlx::query_as::<_, WeekPlan>(
        r#"SELECT id, player_id, week, days, total_rpe, created_at
             FROM week_plans
            WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("get week plan")
}

/// `days` is written as-is; `created_at` of an existing row is kept.
pub async fn upsert(db: &SqlitePool, plan: &WeekPlan) -> StoreResult<WeekPlan> {
    sqlx::query_as::<_, WeekPlan>(
        r#"
        INSERT INTO week_plans (id, player_id, week, days, total_rpe, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT (id) DO UPDATE
           SET player_id = excluded.player_id,
               week      = excluded.week,
               days      = excluded.days,
               total_rpe = excluded.total_rpe
        RETURNING id, player_id, week, days, total_rpe, created_at
        "#,
    )
    .bind(&plan.id)
    .bind(&plan.player_id)
    .bind(&plan.week)
    .bind(&plan.days)
    .bind(plan.total_rpe)
    .bind(&plan.created_at)
    .fetch_one(db)
    .await
    .context("upsert week plan")
}

pub async fn delete(db: &SqlitePool, id: &str) -> StoreResult<()> {
    let rows = sqlx::query("DELETE FROM week_plans WHERE id = ?")
        .bind(id)
        .execute(db)
        .await
        .context("delete week plan")?
        .rows_affected();

    expect_deleted(rows, "week plan", id)
}
