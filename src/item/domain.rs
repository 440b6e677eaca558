//! Core item domain types.

use serde::{Deserialize, Serialize};

use crate::{Error, category::CategoryId, error::missing_fields};

/// Separates image names in the database column.
pub const IMAGE_DELIMITER: &str = ",";

/// The ordered list of image names (e.g., file names or URLs) for an item.
///
/// Images are stored in a single text column joined by [IMAGE_DELIMITER], so
/// an image name must be non-empty and must not contain the delimiter.
/// Serializes as a plain JSON array of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemImages(Vec<String>);

impl ItemImages {
    /// Create an image list.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidImageName] for the first
    /// image that is empty or contains [IMAGE_DELIMITER].
    pub fn new(images: Vec<String>) -> Result<Self, Error> {
        if let Some(invalid) = images
            .iter()
            .find(|image| image.is_empty() || image.contains(IMAGE_DELIMITER))
        {
            return Err(Error::InvalidImageName(invalid.clone()));
        }

        Ok(Self(images))
    }

    /// Parse the delimited text stored in the database.
    ///
    /// An empty string is an empty list.
    pub fn from_stored(stored: &str) -> Self {
        if stored.is_empty() {
            return Self::default();
        }

        Self(stored.split(IMAGE_DELIMITER).map(str::to_owned).collect())
    }

    /// Join the images into the delimited text stored in the database.
    pub fn to_stored(&self) -> String {
        self.0.join(IMAGE_DELIMITER)
    }

    /// The image names in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Database identifier for an item.
pub type ItemId = i64;

/// An item for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Row ID generated by the database.
    pub id: ItemId,
    /// The item's display name.
    pub name: String,
    /// Free-form text shown alongside the item.
    pub description: String,
    /// Unit price. Neither the sign nor the precision is checked.
    pub price: f64,
    /// Image names in display order.
    pub images: ItemImages,
    /// The category the item is filed under.
    ///
    /// Not checked against the category table when the item is created.
    pub category_id: CategoryId,
}

/// A validated item that has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    /// The item's display name.
    pub name: String,
    /// Free-form text shown alongside the item.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Image names in display order, empty when none were given.
    pub images: ItemImages,
    /// The category to file the item under.
    pub category_id: CategoryId,
}

/// The JSON body for creating an item.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<CategoryId>,
    pub images: Option<Vec<String>>,
}

impl TryFrom<ItemRequest> for NewItem {
    type Error = Error;

    fn try_from(request: ItemRequest) -> Result<Self, Self::Error> {
        match (
            request.name,
            request.description,
            request.price,
            request.category_id,
        ) {
            (Some(name), Some(description), Some(price), Some(category_id)) => Ok(Self {
                name,
                description,
                price,
                images: ItemImages::new(request.images.unwrap_or_default())?,
                category_id,
            }),
            (name, description, price, category_id) => Err(Error::MissingFields(missing_fields(&[
                ("name", name.is_some()),
                ("description", description.is_some()),
                ("price", price.is_some()),
                ("category_id", category_id.is_some()),
            ]))),
        }
    }
}
