//! Application router configuration.

use axum::{
    Router,
    routing::{get, put},
};

use crate::{
    AppState,
    category::{create_category_endpoint, get_categories_endpoint, get_category_endpoint},
    endpoints,
    item::{create_item_endpoint, get_item_endpoint, get_items_endpoint},
    not_found::get_404_not_found,
    user::{create_user_endpoint, get_user_endpoint, get_users_endpoint, update_cart_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(endpoints::CATEGORY, get(get_category_endpoint))
        .route(
            endpoints::ITEMS,
            get(get_items_endpoint).post(create_item_endpoint),
        )
        .route(endpoints::ITEM, get(get_item_endpoint))
        .route(
            endpoints::USERS,
            get(get_users_endpoint).post(create_user_endpoint),
        )
        .route(endpoints::USER, get(get_user_endpoint))
        .route(endpoints::USER_CART, put(update_cart_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}


#[cfg(test)]
mod item_route_tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::get_test_server,
    };

    #[tokio::test]
    async fn create_item_in_category() {
        let server = get_test_server();
        server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Electronics"}))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post(endpoints::ITEMS)
            .json(&json!({
                "name": "Phone",
                "description": "Smart phone",
                "price": 299.99,
                "category_id": 1,
                "images": ["p1.jpg"]
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({
            "id": 1,
            "name": "Phone",
            "description": "Smart phone",
            "price": 299.99,
            "category_id": 1,
            "images": ["p1.jpg"]
        }));
    }

    #[tokio::test]
    async fn images_round_trip_through_listing() {
        let server = get_test_server();
        server
            .post(endpoints::ITEMS)
            .json(&json!({
                "name": "Lamp",
                "description": "Desk lamp",
                "price": 20,
                "category_id": 1,
                "images": ["a.png", "b.png"]
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let items = server.get(endpoints::ITEMS).await.json::<Value>();

        assert_eq!(items[0]["images"], json!(["a.png", "b.png"]));
    }

    #[tokio::test]
    async fn images_default_to_empty_array() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ITEMS)
            .json(&json!({
                "name": "Mug",
                "description": "Coffee mug",
                "price": 8.5,
                "category_id": 1
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["images"], json!([]));

        let item = server
            .get(&format_endpoint(endpoints::ITEM, 1))
            .await
            .json::<Value>();
        assert_eq!(item["images"], json!([]));
    }

    #[tokio::test]
    async fn each_missing_required_field_is_bad_request() {
        let server = get_test_server();
        let full = json!({
            "name": "Phone",
            "description": "Smart phone",
            "price": 299.99,
            "category_id": 1
        });

        for field in ["name", "description", "price", "category_id"] {
            let mut body = full.clone();
            body.as_object_mut()
                .expect("body is an object")
                .remove(field);

            let response = server.post(endpoints::ITEMS).json(&body).await;

            response.assert_status_bad_request();
            response.assert_json(&json!({"error": format!("missing required field: {field}")}));
        }

        let listed = server.get(endpoints::ITEMS).await.json::<Value>();
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn image_with_comma_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ITEMS)
            .json(&json!({
                "name": "Phone",
                "description": "Smart phone",
                "price": 1,
                "category_id": 1,
                "images": ["a,b.png"]
            }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn missing_item_is_not_found() {
        let server = get_test_server();

        let response = server.get(&format_endpoint(endpoints::ITEM, 5)).await;

        response.assert_status_not_found();
        response.assert_json(&json!({"error": "item 5 not found"}));
    }
}


#[cfg(test)]
mod fallback_tests {
    use serde_json::json;

    use crate::test_utils::get_test_server;

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let server = get_test_server();

        let response = server.get("/orders").await;

        response.assert_status_not_found();
        response.assert_json(&json!({"error": "the requested resource could not be found"}));
    }
}
