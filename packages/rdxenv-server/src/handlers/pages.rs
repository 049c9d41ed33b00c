use axum::extract::State;
use axum::response::Html;
use rdxenv_hero::XorShiftRng;
use rdxenv_site::{PageKind, SiteApp};

use crate::ServerResult;
use crate::state::AppState;

/// Initialises `page` against the content store and serialises it. Sections
/// whose content is unavailable are left out; the page itself still renders.
async fn render(state: &AppState, page: PageKind) -> ServerResult<Html<String>> {
    let viewport = state.config().viewport.into();
    let mut app = SiteApp::new(state.store().clone(), page, viewport)?;
    let mut rng = XorShiftRng::from_entropy();
    let report = app.init(&mut rng).await;
    if !report.is_complete() {
        tracing::warn!(%page, skipped = report.skipped.len(), "page rendered partially");
    }
    let html = app.render_html();
    app.shutdown();
    Ok(Html(html))
}

/// GET /
pub async fn index(State(state): State<AppState>) -> ServerResult<Html<String>> {
    render(&state, PageKind::Index).await
}

/// GET /filmography
pub async fn filmography(State(state): State<AppState>) -> ServerResult<Html<String>> {
    render(&state, PageKind::Filmography).await
}
