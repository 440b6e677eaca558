//! Users and their carts.

mod cart;
mod create;
mod db;
mod domain;
mod list;

pub use cart::update_cart_endpoint;
pub use create::create_user_endpoint;
pub use db::{create_user, create_user_table, get_all_users, get_user, update_user_cart};
pub use domain::{CartRequest, NewUser, User, UserId, UserRequest};
pub use list::{get_user_endpoint, get_users_endpoint};
