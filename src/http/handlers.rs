//! Cart request handlers.
//!
//! Each handler maps one request to one cart operation and one response:
//! mutations answer `303 See Other` back to `/`, rejections answer 400.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use serde::Serialize;

use crate::http::forms::{CartForm, DeleteItemForm, UpdateCommentForm};
use crate::http::response::ApiError;
use crate::http::server::AppState;

const CART_PATH: &str = "/";

/// One row of `GET /api/items`.
#[derive(Debug, Serialize)]
pub struct ItemSummary {
    pub position: usize,
    pub item_number: String,
    pub comment: String,
}

/// `GET /`
pub async fn render_cart(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let items = state.store.snapshot();
    let body = state.view.render(&items)?;
    Ok(Html(body))
}

/// `GET /api/add`
pub async fn add_item(State(state): State<AppState>) -> Redirect {
    let item = state.store.add();
    tracing::info!(item_number = %item.item_number, "Item added");
    Redirect::to(CART_PATH)
}

/// `POST /api/updatecomment`
pub async fn update_comment(
    State(state): State<AppState>,
    CartForm(form): CartForm<UpdateCommentForm>,
) -> Result<Redirect, ApiError> {
    state.store.update_comment_matching(
        form.itemnumber,
        form.expected_id().as_ref(),
        &form.comment,
    )?;
    tracing::info!(position = form.itemnumber, "Comment updated");
    Ok(Redirect::to(CART_PATH))
}

/// `POST /api/delete`
pub async fn delete_item(
    State(state): State<AppState>,
    CartForm(form): CartForm<DeleteItemForm>,
) -> Result<Redirect, ApiError> {
    let removed = state
        .store
        .delete_matching(form.itemnumber, form.expected_id().as_ref())?;
    tracing::info!(position = form.itemnumber, item_number = %removed.item_number, "Item deleted");
    Ok(Redirect::to(CART_PATH))
}

/// `GET /api/items`
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<ItemSummary>> {
    let items = state
        .store
        .snapshot()
        .into_iter()
        .enumerate()
        .map(|(position, item)| ItemSummary {
            position,
            item_number: item.item_number.to_string(),
            comment: item.comment,
        })
        .collect();
    Json(items)
}
