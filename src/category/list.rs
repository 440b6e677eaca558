//! Endpoints for reading categories.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    category::{Category, CategoryId, create::CategoryState, get_all_categories, get_category},
    db::lock_connection,
};

/// Respond with every category.
pub async fn get_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_categories(&connection).map(Json)
}

/// Respond with the category whose ID matches the path, or 404.
pub async fn get_category_endpoint(
    State(state): State<CategoryState>,
    category_id: Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<Category>, Error> {
    let Path(category_id) = category_id?;
    let connection = lock_connection(&state.db_connection)?;

    get_category(category_id, &connection).map(Json)
}
