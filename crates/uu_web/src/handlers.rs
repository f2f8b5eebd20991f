use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use tracing::error;

use crate::pages;
use crate::AppState;

pub async fn feed_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let dark_mode = state.theme.read().await.dark_mode();
    Html(pages::render_feed(&state.articles, dark_mode))
}

/// The route id is the card's position in the sorted snapshot. Anything
/// that does not resolve to an article, a non-numeric id included, gets
/// the placeholder page rather than an error status.
pub async fn article_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Html<String> {
    let dark_mode = state.theme.read().await.dark_mode();
    let found = id
        .parse::<usize>()
        .ok()
        .and_then(|index| state.articles.get(index).map(|article| (index, article)));
    match found {
        Some((index, article)) => Html(pages::render_article(article, index, dark_mode)),
        None => Html(pages::render_missing(dark_mode, &format!("/article/{}", id))),
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    #[serde(default)]
    pub redirect: Option<String>,
}

pub async fn toggle_theme(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ToggleForm>,
) -> Redirect {
    if let Err(e) = state.theme.write().await.toggle() {
        error!("Failed to persist theme preference: {}", e);
    }
    let target = form
        .redirect
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());
    Redirect::to(&target)
}
