//! Endpoints for reading users.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    db::lock_connection,
    user::{User, UserId, create::UserState, get_all_users, get_user},
};

/// Respond with every user.
pub async fn get_users_endpoint(State(state): State<UserState>) -> Result<Json<Vec<User>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_users(&connection).map(Json)
}

/// Respond with the user whose ID matches the path, or 404.
pub async fn get_user_endpoint(
    State(state): State<UserState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, Error> {
    let Path(user_id) = user_id?;
    let connection = lock_connection(&state.db_connection)?;

    get_user(UserId::new(user_id), &connection).map(Json)
}
