use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use training_tracker_server::config::settings;
use training_tracker_server::db;
use training_tracker_server::http::{cors::Cors, error::json_config, routes};
use training_tracker_server::ids::{IdGenerator, TimeRandomIds};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = settings();

    // Fatal before binding if the store cannot be opened.
    let db_pool = db::open(Path::new(&cfg.database_path), cfg.max_connections)
        .await
        .context("initialize database")?;

    let ids: web::Data<dyn IdGenerator> =
        web::Data::from(Arc::new(TimeRandomIds) as Arc<dyn IdGenerator>);
    let max_body = cfg.max_body_bytes;

    log::info!("server starting on {}", cfg.server_addr);

    let server_pool = db_pool.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(server_pool.clone()))
            .app_data(ids.clone())
            .app_data(json_config(max_body))
            .configure(routes::init_routes)
    })
    .client_request_timeout(cfg.read_timeout)
    .client_disconnect_timeout(cfg.write_timeout)
    .keep_alive(cfg.idle_timeout)
    .shutdown_timeout(cfg.shutdown_grace.as_secs())
    .bind(&cfg.server_addr)
    .with_context(|| format!("binding {}", cfg.server_addr))?
    .run()
    .await
    .context("server error")?;

    db_pool.close().await;
    log::info!("server stopped");
    Ok(())
}
