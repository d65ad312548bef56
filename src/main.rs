use anyhow::Context;
use tracing::info;

mod app;
mod config;
mod products;
mod state;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "product_catalog=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;

    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .context("run database migrations")?;

    info!("API endpoints:");
    info!("  POST   /products/generate - Generate products");
    info!("  GET    /products - Get products with filters");
    info!("  GET    /products/stats - Get product statistics");
    info!("  GET    /products/filters - Get available filters");
    info!("  DELETE /products - Clear all products");

    let app = app::build_app(state);
    app::serve(app).await
}
