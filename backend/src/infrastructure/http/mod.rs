mod auth;
mod error;
mod handlers;
mod state;

pub use auth::{MaybeIdentity, SessionStore};
pub use error::AppError;
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the registry's router. One route per operation, JSON in and out.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/api/pages",
            get(handlers::fetch_pages_handler).post(handlers::create_page_handler),
        )
        .route("/api/pages/save", post(handlers::save_page_handler))
        .route("/api/pages/rename", post(handlers::rename_page_handler))
        .route(
            "/api/pages/duplicate",
            post(handlers::duplicate_page_handler),
        )
        .route("/api/pages/delete", post(handlers::delete_page_handler))
        .route("/api/pages/restore", post(handlers::restore_page_handler))
        .route("/api/pages/reorder", post(handlers::reorder_pages_handler))
        .route("/api/auth/login", post(handlers::login_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
