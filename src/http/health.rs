//! Simple liveness / readiness probe

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;

#[get("/healthz")]
pub async fn healthz(pool: web::Data<SqlitePool>) -> impl Responder {
    if let Err(e) = db::ping(pool.get_ref()).await {
        log::error!("health check failed: {e}");
        return HttpResponse::ServiceUnavailable().json(json!({ "status": "db" }));
    }

    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}
