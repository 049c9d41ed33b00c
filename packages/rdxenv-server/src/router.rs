use axum::Router;
use axum::routing::{MethodRouter, get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{api, pages};
use crate::state::AppState;

/// Create the router: content API, server-rendered pages, and the public
/// directory with the index page for any path that is not a file.
pub fn create_router(state: AppState) -> Router {
    let index: MethodRouter = get(pages::index).with_state(state.clone());
    let public = ServeDir::new(&state.config().public_dir).fallback(index);

    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/filmography", get(pages::filmography))
        // Content API
        .route("/api/clients", get(api::clients))
        .route("/api/projects", get(api::projects))
        .route("/api/projects/:client_id", get(api::client_projects))
        .route("/api/films", get(api::films))
        .route("/api/copy", get(api::copy))
        .route("/api/images", get(api::images))
        .route("/api/hero", get(api::hero))
        .route("/api/hero/config", get(api::hero_config))
        .route("/api/background-colours", get(api::background_colours))
        .fallback_service(public)
        // State and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
