//! Player profiles.

use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::SqlitePool;

use crate::db::models::Player;
use crate::db::player_repo;
use crate::http::error::{require_key, ApiError};
use crate::ids::{now_rfc3339, IdGenerator};

/// GET /api/v1/players
#[get("/players")]
pub async fn list(db: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let players = player_repo::list(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(players))
}

/// POST /api/v1/players
#[post("/players")]
pub async fn create(
    body: web::Json<Player>,
    db: web::Data<SqlitePool>,
    ids: web::Data<dyn IdGenerator>,
) -> Result<HttpResponse, ApiError> {
    let mut p = body.into_inner();
    if p.id.is_empty() {
        p.id = ids.next_id();
    }
    let now = now_rfc3339();
    if p.created_at.is_empty() {
        p.created_at = now.clone();
    }
    p.updated_at = now;

    let stored = player_repo::upsert(db.get_ref(), &p).await?;
    Ok(HttpResponse::Created().json(stored))
}

/// PUT /api/v1/players/{id}
///
/// The path id always wins over whatever id the body carries.
#[put("/players/{id}")]
pub async fn update(
    path: web::Path<String>,
    body: web::Json<Player>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    require_key(&id, "id")?;

    let mut p = body.into_inner();
    p.id = id;
    let now = now_rfc3339();
    // Only lands when the row is new; the upsert keeps an existing created_at.
    if p.created_at.is_empty() {
        p.created_at = now.clone();
    }
    p.updated_at = now;

    let stored = player_repo::upsert(db.get_ref(), &p).await?;
    Ok(HttpResponse::Ok().json(stored))
}

/// DELETE /api/v1/players/{id}
#[delete("/players/{id}")]
pub async fn remove(
    path: web::Path<String>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    require_key(&id, "id")?;

    player_repo::delete(db.get_ref(), &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(update)
        .service(remove);
}
