//! Core user domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, error::missing_fields};

/// A newtype wrapper for integer user IDs.
///
/// This helps disambiguate user IDs from category and item IDs, which are
/// plain integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Create a new user ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Cast the user ID to a 64 bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A shopper and the contents of their cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Row ID generated by the database.
    pub id: UserId,
    /// The user's display name.
    pub name: String,
    /// The user's email address. Neither the format nor uniqueness is checked.
    pub email: String,
    /// Free-form text describing the cart contents, empty for an empty cart.
    pub cart: String,
}

/// A validated user that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// The user's display name.
    pub name: String,
    /// The user's email address, stored as given.
    pub email: String,
    /// The initial cart, empty unless the request supplied one.
    pub cart: String,
}

/// The JSON body for creating a user.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cart: Option<String>,
}

impl TryFrom<UserRequest> for NewUser {
    type Error = Error;

    fn try_from(request: UserRequest) -> Result<Self, Self::Error> {
        match (request.name, request.email) {
            (Some(name), Some(email)) => Ok(Self {
                name,
                email,
                cart: request.cart.unwrap_or_default(),
            }),
            (name, email) => Err(Error::MissingFields(missing_fields(&[
                ("name", name.is_some()),
                ("email", email.is_some()),
            ]))),
        }
    }
}

/// The JSON body for replacing a user's cart.
///
/// A missing `cart` empties the cart.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CartRequest {
    pub cart: Option<String>,
}
