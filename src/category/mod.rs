//! Categories that items are filed under.

mod create;
mod db;
mod domain;
mod list;

pub use create::create_category_endpoint;
pub use db::{create_category, create_category_table, get_all_categories, get_category};
pub use domain::{Category, CategoryId, CategoryName, CategoryRequest, NewCategory};
pub use list::{get_categories_endpoint, get_category_endpoint};
