//! Endpoints for reading items.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    db::lock_connection,
    item::{Item, ItemId, create::ItemState, get_all_items, get_item},
};

/// Respond with every item.
pub async fn get_items_endpoint(State(state): State<ItemState>) -> Result<Json<Vec<Item>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_items(&connection).map(Json)
}

/// Respond with the item whose ID matches the path, or 404.
pub async fn get_item_endpoint(
    State(state): State<ItemState>,
    item_id: Result<Path<ItemId>, PathRejection>,
) -> Result<Json<Item>, Error> {
    let Path(item_id) = item_id?;
    let connection = lock_connection(&state.db_connection)?;

    get_item(item_id, &connection).map(Json)
}
