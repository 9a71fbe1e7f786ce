//! Exercise media attachments (images, clips, links).

use actix_web::{delete, get, post, web, HttpResponse};
use sqlx::SqlitePool;

use crate::db::media_repo;
use crate::db::models::Media;
use crate::http::error::{require_key, ApiError};
use crate::ids::{now_rfc3339, IdGenerator};

#[get("/media")]
pub async fn list(db: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let media = media_repo::list(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(media))
}

#[post("/media")]
pub async fn create(
    body: web::Json<Media>,
    db: web::Data<SqlitePool>,
    ids: web::Data<dyn IdGenerator>,
) -> Result<HttpResponse, ApiError> {
    let mut m = body.into_inner();
    if m.id.is_empty() {
        m.id = ids.next_id();
    }
    if m.created_at.is_empty() {
        m.created_at = now_rfc3339();
    }

    let stored = media_repo::upsert(db.get_ref(), &m).await?;
    Ok(HttpResponse::Created().json(stored))
}

#[delete("/media/{id}")]
pub async fn remove(
    path: web::Path<String>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    require_key(&id, "id")?;

    media_repo::delete(db.get_ref(), &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(create).service(remove);
}
