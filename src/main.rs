mod config;
mod error;
mod models;
mod registry;
mod routes;

use std::net::SocketAddr;
use std::sync::RwLock;

use actix_files::Files;
use actix_web::{
    middleware::{Logger, NormalizePath},
    web, App, HttpResponse, HttpServer,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::registry::ActivityRegistry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string())
        .parse()
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Mergington High School activities API");

    let config = Config::from_env()?;

    // The registry is built once here and handed to the handler layer as app
    // state; rosters are the only thing that mutates afterwards.
    let registry = web::Data::new(RwLock::new(ActivityRegistry::with_seed_data()));

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    let static_dir = config.static_dir.clone();

    info!("Server running at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(registry.clone())
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(routes::root_redirect))
            .configure(routes::create_routes)
            .service(Files::new("/static", &static_dir))
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": true }))
}
