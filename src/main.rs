// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use anyhow::Context;
use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_controller::DashboardController;
use crate::application::loader::load_dataset;
use crate::application::sprint_source::SprintSource;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::file_source::FileSprintSource;
use crate::infrastructure::http_source::HttpSprintSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    apply_filters, current_dashboard, export_csv, filter_options, health_check, index,
    reset_filters, stream_dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config().context("Failed to load dashboard configuration")?;

    // Load the dataset once; failures degrade to an empty dashboard
    let source: Box<dyn SprintSource> = if config.data.is_remote() {
        Box::new(HttpSprintSource::new(config.data.source.clone()))
    } else {
        Box::new(FileSprintSource::new(&config.data.source))
    };
    let outcome = load_dataset(source.as_ref()).await;

    // Create application state
    let controller = DashboardController::new(outcome);
    let state = Arc::new(AppState::new(
        controller,
        config.export.filename_template.clone(),
    ));

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/filters", get(filter_options))
        .route("/api/dashboard", get(current_dashboard).post(apply_filters))
        .route("/api/dashboard/stream", get(stream_dashboard))
        .route("/api/reset", post(reset_filters))
        .route("/api/export", get(export_csv))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Sprint Analytics Dashboard serving on http://{}", addr);
    tracing::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}
