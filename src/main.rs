use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod model;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = AppState::new(&config).map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize application state");
        std::io::Error::other(e)
    })?;
    let state = web::Data::new(state);

    tracing::info!(
        provider = state.provider,
        "Starting knowledge gap agent server on {}",
        bind_addr
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(api::json_config())
            .configure(api::health::configure)
            .configure(api::openapi::configure)
            .configure(api::analysis::configure)
            .configure(api::gaps::configure)
            .configure(api::faqs::configure)
            .configure(api::content::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
