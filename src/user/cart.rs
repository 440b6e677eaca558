//! Endpoint for replacing a user's cart.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
};

use crate::{
    Error,
    db::lock_connection,
    user::{CartRequest, User, UserId, create::UserState, update_user_cart},
};

/// Handle a request to overwrite the cart of the user in the path.
///
/// A body without `cart` empties the cart. Repeating the same request leaves
/// the user unchanged.
pub async fn update_cart_endpoint(
    State(state): State<UserState>,
    user_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CartRequest>, JsonRejection>,
) -> Result<Json<User>, Error> {
    let Path(user_id) = user_id?;
    let user_id = UserId::new(user_id);
    let Json(request) = payload?;
    let cart = request.cart.unwrap_or_default();

    let connection = lock_connection(&state.db_connection)?;
    let user = update_user_cart(user_id, &cart, &connection)?;
    tracing::debug!("updated cart for user {user_id}");

    Ok(Json(user))
}
