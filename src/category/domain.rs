//! Core category domain types.

use serde::{Deserialize, Serialize};

use crate::{Error, error::missing_fields};

/// The name of a category, stored exactly as the client sent it.
///
/// Only the empty string is rejected. Whitespace is part of the name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Wrap `name` without changing it.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyCategoryName] when `name` is `""`.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::EmptyCategoryName);
        }

        Ok(Self(name.to_owned()))
    }

    /// Wrap a name read back from the database, where it was already checked.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A category that items are filed under (e.g., 'Electronics').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// Row ID generated by the database.
    pub id: CategoryId,
    /// Display name.
    pub name: CategoryName,
    /// Inactive categories are kept but flagged.
    pub is_active: bool,
}

/// A validated category that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Display name.
    pub name: CategoryName,
    /// Defaults to `true` when the request omits it.
    pub is_active: bool,
}

/// The JSON body for creating a category.
///
/// Every field is optional at the parsing stage so that missing fields can be
/// reported by name instead of as a generic parse error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl TryFrom<CategoryRequest> for NewCategory {
    type Error = Error;

    fn try_from(request: CategoryRequest) -> Result<Self, Self::Error> {
        let Some(name) = request.name else {
            return Err(Error::MissingFields(missing_fields(&[("name", false)])));
        };

        Ok(Self {
            name: CategoryName::new(&name)?,
            is_active: request.is_active.unwrap_or(true),
        })
    }
}
