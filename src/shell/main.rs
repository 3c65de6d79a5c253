use std::sync::Arc;

use course_registration::modules::catalog::core::seed::default_courses;
use course_registration::modules::catalog::use_cases::seed_catalog::handler::SeedCatalogHandler;
use course_registration::shell::config::AppConfig;
use course_registration::shell::http::router;
use course_registration::shell::state::AppState;
use course_registration::shell::workers::spawn_outbox_relay;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;
    let state = AppState::in_memory(&config);

    if config.seed_catalog {
        SeedCatalogHandler::new(Arc::clone(&state.catalog))
            .handle(default_courses())
            .await?;
    }

    let relay = spawn_outbox_relay(Arc::clone(&state.outbox), config.outbox_relay_interval());

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "course registration API listening (GraphQL at /gql)");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    relay.abort();
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
