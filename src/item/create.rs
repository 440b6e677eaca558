//! Item creation endpoint.

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
    item::{Item, ItemRequest, NewItem, create_item},
};

/// The state needed for reading and creating items.
#[derive(Debug, Clone)]
pub struct ItemState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ItemState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle a request to create an item.
///
/// The `images` field is optional and defaults to an empty list.
pub async fn create_item_endpoint(
    State(state): State<ItemState>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), Error> {
    let Json(request) = payload?;
    let new_item = NewItem::try_from(request)?;

    let connection = lock_connection(&state.db_connection)?;
    let item = create_item(new_item, &connection)?;
    tracing::debug!("created item {} in category {}", item.id, item.category_id);

    Ok((StatusCode::CREATED, Json(item)))
}

#[cfg(test)]
mod create_item_endpoint_tests {
    use axum::{Json, extract::State, http::StatusCode};

    use crate::{
        Error,
        db::lock_connection,
        item::{ItemRequest, create::ItemState, create_item_endpoint, get_item},
        test_utils::get_test_db_connection,
    };

    fn get_item_state() -> ItemState {
        ItemState {
            db_connection: get_test_db_connection(),
        }
    }

    #[tokio::test]
    async fn can_create_item() {
        let state = get_item_state();
        let request = ItemRequest {
            name: Some("Phone".to_owned()),
            description: Some("Smart phone".to_owned()),
            price: Some(299.99),
            category_id: Some(1),
            images: Some(vec!["p1.jpg".to_owned()]),
        };

        let (status, Json(item)) = create_item_endpoint(State(state.clone()), Ok(Json(request)))
            .await
            .expect("Could not create item");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(item.price, 299.99);
        assert_eq!(item.images.as_slice(), ["p1.jpg"]);
        let connection = lock_connection(&state.db_connection).unwrap();
        assert_eq!(Ok(item.clone()), get_item(item.id, &connection));
    }

    #[tokio::test]
    async fn create_item_fails_on_missing_fields() {
        let state = get_item_state();

        let result = create_item_endpoint(State(state), Ok(Json(ItemRequest::default()))).await;

        assert_eq!(
            result.err(),
            Some(Error::MissingFields(vec![
                "name",
                "description",
                "price",
                "category_id"
            ]))
        );
    }
}
