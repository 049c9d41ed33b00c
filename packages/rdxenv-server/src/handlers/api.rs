use axum::extract::{Path, State};
use axum::response::Json;
use rdxenv_content::ContentDocument;
use serde_json::Value;

use crate::ServerResult;
use crate::state::AppState;

async fn passthrough(state: &AppState, document: ContentDocument) -> ServerResult<Json<Value>> {
    Ok(Json(state.store().read(document).await?))
}

/// GET /api/clients
pub async fn clients(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    passthrough(&state, ContentDocument::Clients).await
}

/// GET /api/projects
pub async fn projects(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    passthrough(&state, ContentDocument::Projects).await
}

/// GET /api/projects/:client_id - `{ "projects": [...] }`, 404 for unknown clients
pub async fn client_projects(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> ServerResult<Json<Value>> {
    Ok(Json(state.store().client_projects(&client_id).await?))
}

/// GET /api/films
pub async fn films(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    passthrough(&state, ContentDocument::Films).await
}

/// GET /api/copy
pub async fn copy(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    passthrough(&state, ContentDocument::Copy).await
}

/// GET /api/images
pub async fn images(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    passthrough(&state, ContentDocument::Images).await
}

/// GET /api/hero
pub async fn hero(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    passthrough(&state, ContentDocument::Hero).await
}

/// GET /api/hero/config
pub async fn hero_config(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    passthrough(&state, ContentDocument::HeroConfig).await
}

/// GET /api/background-colours - requires a `colors` array
pub async fn background_colours(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    passthrough(&state, ContentDocument::BackgroundColours).await
}
