//! Free-form key/value application settings.

use actix_web::{get, put, web, HttpResponse};
use sqlx::SqlitePool;

use crate::db::models::Setting;
use crate::db::setting_repo;
use crate::http::error::{require_key, ApiError};

#[get("/settings/{key}")]
pub async fn get_one(
    path: web::Path<String>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let key = path.into_inner();
    require_key(&key, "key")?;

    let setting = setting_repo::get(db.get_ref(), &key)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(setting))
}

#[put("/settings/{key}")]
pub async fn update(
    path: web::Path<String>,
    body: web::Json<Setting>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let key = path.into_inner();
    require_key(&key, "key")?;

    let mut setting = body.into_inner();
    setting.key = key;

    let stored = setting_repo::upsert(db.get_ref(), &setting).await?;
    Ok(HttpResponse::Ok().json(stored))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_one).service(update);
}
