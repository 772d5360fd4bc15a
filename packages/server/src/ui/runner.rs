//! Router assembly and server lifecycle.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    infrastructure::repository::InMemoryUserRegistry,
    ui::{
        config::ServerConfig,
        handler::{get_rooms, health_check, websocket_handler},
        outbox::Outbox,
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Run the chat relay server until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), std::io::Error> {
    let state = Arc::new(AppState {
        registry: Arc::new(InMemoryUserRegistry::new()),
        outbox: Outbox::new(),
    });

    let app = Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
