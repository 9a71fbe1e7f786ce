use crate::http;
use actix_web::web;

/// Health probe at the root, every resource under `/api/v1`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::health::init_routes).service(
        web::scope("/api/v1")
            .configure(http::players::init_routes)
            .configure(http::week_plans::init_routes)
            .configure(http::media::init_routes)
            .configure(http::player_logs::init_routes)
            .configure(http::settings::init_routes),
    );
}
