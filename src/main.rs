mod model;
mod server;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, dispatch::Dispatcher, error::AppError, router::router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_default_admin(&db).await?;

    // Method registries are built once here; every invoke call afterwards is
    // a plain map lookup.
    let state = AppState {
        db,
        dispatcher: Arc::new(Dispatcher::new()),
    };

    tracing::info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, router().with_state(state)).await?;

    Ok(())
}
