//! Page handlers
//!
//! Each handler prepares page props, hydrates the app shell and renders the
//! page body through it.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    response::Html,
};
use serde::Deserialize;

use crate::domain::entities::Cursor;
use crate::error::AppError;
use crate::pages::{get_server_side_props, render_dashboard, render_index, AppShell, PageProps};
use crate::AppState;

/// GET /
pub async fn index() -> Result<Html<String>, AppError> {
    let shell = AppShell::hydrate(PageProps::default()).await;
    Ok(Html(shell.render("Tumblr", &render_index())?))
}

/// Query parameters for GET /dashboard
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub after: Option<String>,
}

/// GET /dashboard
///
/// Prefetches the requested page of posts, then renders it from the
/// hydrated cache.
pub async fn dashboard(
    State(state): State<AppState>,
    params: Result<Query<DashboardParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let after = parse_after(params.after)?;
    let first = state.config.posts_page_size;

    let props = get_server_side_props(state.sdk.as_ref(), after.as_ref(), first).await;
    let shell = AppShell::hydrate(props).await;
    let body = render_dashboard(shell.client(), state.sdk.as_ref(), after.as_ref(), first).await?;

    Ok(Html(shell.render("Dashboard", &body)?))
}

/// Fallback for paths without a page
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// An empty `after` means the first page
fn parse_after(after: Option<String>) -> Result<Option<Cursor>, AppError> {
    let Some(raw) = after.filter(|a| !a.is_empty()) else {
        return Ok(None);
    };

    let cursor = Cursor::from(raw);
    let position = cursor.decode()?;
    tracing::debug!(rowid = position.rowid, ty = %position.ty, "Dashboard page after cursor");

    Ok(Some(cursor))
}
