//! Weekly training plans. Created implicitly by PUT; there is no POST.

use actix_web::{delete, get, put, web, HttpResponse};
use sqlx::SqlitePool;

use crate::db::models::WeekPlan;
use crate::db::week_plan_repo;
use crate::http::error::{require_key, ApiError};
use crate::ids::now_rfc3339;

#[get("/week-plans")]
pub async fn list(db: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let plans = week_plan_repo::list(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(plans))
}

#[get("/week-plans/{id}")]
pub async fn get_one(
    path: web::Path<String>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    require_key(&id, "id")?;

    match week_plan_repo::get(db.get_ref(), &id).await? {
        Some(plan) => Ok(HttpResponse::Ok().json(plan)),
        None => Err(ApiError::NotFound),
    }
}

/// Week plans carry no `updatedAt`; `createdAt` is stamped only when absent
/// and the stored value survives later PUTs.
#[put("/week-plans/{id}")]
pub async fn update(
    path: web::Path<String>,
    body: web::Json<WeekPlan>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    require_key(&id, "id")?;

    let mut plan = body.into_inner();
    plan.id = id;
    if plan.created_at.is_empty() {
        plan.created_at = now_rfc3339();
    }

    let stored = week_plan_repo::upsert(db.get_ref(), &plan).await?;
    Ok(HttpResponse::Ok().json(stored))
}

#[delete("/week-plans/{id}")]
pub async fn remove(
    path: web::Path<String>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    require_key(&id, "id")?;

    week_plan_repo::delete(db.get_ref(), &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(get_one)
        .service(update)
        .service(remove);
}
