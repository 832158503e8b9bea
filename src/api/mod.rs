use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::state::AppState;

pub mod handlers;
pub mod models;

pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        // API routes
        .route("/api/search", get(handlers::search_handler))
        // Views
        .route("/", get(handlers::home_page).post(handlers::submit_query))
        .route("/search", get(handlers::results_page))
        .route("/login", get(handlers::login_page).post(handlers::login_submit))
        .with_state(state)
        // Stylesheet and other assets
        .nest_service("/static", static_dir)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serves the router on an already bound listener until the process exits.
pub async fn serve(listener: tokio::net::TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("API running on http://{addr}");
    }
    axum::serve(listener, create_router(state)).await
}
