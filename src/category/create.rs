//! Category creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    category::{Category, CategoryRequest, NewCategory, create_category},
    db::lock_connection,
};

/// The state needed for reading and creating categories.
#[derive(Debug, Clone)]
pub struct CategoryState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle a request to create a category.
///
/// Responds with the new category and the status code 201 on success.
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), Error> {
    let Json(request) = payload?;
    let new_category = NewCategory::try_from(request)?;

    let connection = lock_connection(&state.db_connection)?;
    let category = create_category(new_category, &connection)?;
    tracing::debug!("created category {}", category.id);

    Ok((StatusCode::CREATED, Json(category)))
}
