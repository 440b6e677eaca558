//! Items for sale and their images.

mod create;
mod db;
mod domain;
mod list;

pub use create::create_item_endpoint;
pub use db::{create_item, create_item_table, get_all_items, get_item};
pub use domain::{Item, ItemId, ItemImages, ItemRequest, NewItem};
pub use list::{get_item_endpoint, get_items_endpoint};
