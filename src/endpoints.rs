//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/users/{user_id}', use [format_endpoint].

/// The route to list and create categories.
pub const CATEGORIES: &str = "/categories";
/// The route to get a single category.
pub const CATEGORY: &str = "/categories/{category_id}";
/// The route to list and create items.
pub const ITEMS: &str = "/items";
/// The route to get a single item.
pub const ITEM: &str = "/items/{item_id}";
/// The route to list and create users.
pub const USERS: &str = "/users";
/// The route to get a single user.
pub const USER: &str = "/users/{user_id}";
/// The route to replace a user's cart.
pub const USER_CART: &str = "/users/{user_id}/cart";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let Some(length) = endpoint_path[start..].find('}') else {
        return endpoint_path.to_owned();
    };

    let end = start + length + 1;

    format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end..])
}
