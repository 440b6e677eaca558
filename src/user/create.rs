//! User creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    db::lock_connection,
    user::{NewUser, User, UserRequest, create_user},
};

/// The state needed for reading and writing users.
#[derive(Debug, Clone)]
pub struct UserState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UserState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle a request to create a user.
///
/// The `cart` field is optional and defaults to an empty string.
pub async fn create_user_endpoint(
    State(state): State<UserState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), Error> {
    let Json(request) = payload?;
    let new_user = NewUser::try_from(request)?;

    let connection = lock_connection(&state.db_connection)?;
    let user = create_user(new_user, &connection)?;
    tracing::debug!("created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}
