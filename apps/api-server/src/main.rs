//! # Tastebook API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use tastebook_core::ports::{PasswordService, RateLimiter, TokenService};
use tastebook_infra::auth::{Argon2PasswordService, JwtTokenService};
use tastebook_infra::database;
use tastebook_infra::rate_limit::InMemoryRateLimiter;

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Tastebook API Server on {}:{}",
        config.host,
        config.port
    );

    // The database is mandatory: every feature is backed by it.
    let Some(db_config) = config.database.as_ref() else {
        tracing::error!("DATABASE_URL is not set; refusing to start");
        return Err(std::io::Error::other("DATABASE_URL is required"));
    };
    let db = database::connect(db_config)
        .await
        .map_err(std::io::Error::other)?;

    let state = AppState::new(db);

    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
    let auth_limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::from_env());

    HttpServer::new(move || {
        let auth_limiter = auth_limiter.clone();
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(password_service.clone()))
            .configure(move |cfg| handlers::configure_routes(cfg, auth_limiter))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,tastebook_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
