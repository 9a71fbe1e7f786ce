use actix_web::{get, put, web, HttpResponse};
use sqlx::SqlitePool;

use crate::db::models::PlayerLog;
use crate::db::player_log_repo;
use crate::http::error::{require_key, ApiError};
use crate::ids::now_rfc3339;

#[get("/player-logs/{key}")]
pub async fn get_one(
    path: web::Path<String>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let key = path.into_inner();
    require_key(&key, "key")?;

    let log = player_log_repo::get(db.get_ref(), &key)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(log))
}

/// Always upserts; the key doubles as the log id.
#[put("/player-logs/{key}")]
pub async fn update(
    path: web::Path<String>,
    body: web::Json<PlayerLog>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let key = path.into_inner();
    require_key(&key, "key")?;

    let mut log = body.into_inner();
    log.id = key;
    log.updated_at = now_rfc3339();

    let stored = player_log_repo::upsert(db.get_ref(), &log).await?;
    Ok(HttpResponse::Ok().json(stored))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_one).service(update);
}
