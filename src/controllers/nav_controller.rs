use axum::{extract::{Query, State}, response::Response};
use serde::Deserialize;

use crate::{render, views::nav::NavShell, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    pub path: Option<String>,
    pub open: Option<bool>,
}

// GET /nav?path=&open= (HTMX partial: re-renders the top bar with the menu toggled)
pub async fn get_nav(State(state): State<AppState>, Query(q): Query<NavQuery>) -> Response {
    let shell = NavShell::new(q.path.as_deref().unwrap_or("/")).with_menu(q.open.unwrap_or(false));
    render::partial(&state, "partials/navbar", &shell.to_ctx())
}
