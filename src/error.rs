//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{category::CategoryId, item::ItemId, user::UserId};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more required fields were absent (or `null`) in the request body.
    ///
    /// Holds the names of every missing field in the order they are declared
    /// by the request type.
    #[error("{}", missing_fields_message(.0))]
    MissingFields(Vec<&'static str>),

    /// The request body could not be parsed as the expected JSON object.
    ///
    /// This covers a missing JSON content type, syntactically invalid JSON,
    /// and fields with the wrong JSON type.
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// The request body was larger than the server will buffer.
    #[error("request body is too large")]
    RequestBodyTooLarge,

    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// An item image name was empty or contained the delimiter used to store
    /// the image list.
    #[error("invalid image name {0:?}: image names must not be empty or contain a comma")]
    InvalidImageName(String),

    /// No category with the given ID exists.
    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),

    /// No item with the given ID exists.
    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    /// No user with the given ID exists.
    #[error("user {0} not found")]
    UserNotFound(UserId),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers this is returned for unknown routes and path
    /// parameters that are not valid IDs.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

fn missing_fields_message(fields: &[&'static str]) -> String {
    let noun = if fields.len() == 1 { "field" } else { "fields" };

    format!("missing required {noun}: {}", fields.join(", "))
}

/// Collect the names of the required fields whose value is absent.
///
/// Each entry pairs a field name with whether the field was present.
pub fn missing_fields(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, is_present)| !is_present)
        .map(|(name, _)| *name)
        .collect()
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidJson(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("could not parse path parameter: {}", rejection.body_text());
        Error::NotFound
    }
}

/// The JSON body sent to the client for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human readable description of what went wrong.
    pub error: String,
}

impl Error {
    /// The HTTP status code that the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFields(_)
            | Error::InvalidJson(_)
            | Error::EmptyCategoryName
            | Error::InvalidImageName(_) => StatusCode::BAD_REQUEST,
            Error::CategoryNotFound(_)
            | Error::ItemNotFound(_)
            | Error::UserNotFound(_)
            | Error::NotFound => StatusCode::NOT_FOUND,
            Error::RequestBodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let message = if status_code.is_server_error() {
            // Details of server errors are not intended to be shown to the client.
            tracing::error!("An unexpected error occurred: {}", self);
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status_code, Json(ErrorBody { error: message })).into_response()
    }
}
