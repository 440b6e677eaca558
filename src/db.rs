//! Schema setup and shared helpers for the application's SQLite database.

use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error, category::create_category_table, item::create_item_table, user::create_user_table,
};

/// Create the tables for the domain models if they do not already exist.
///
/// Safe to call every time the server starts.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    create_category_table(&transaction)?;
    create_item_table(&transaction)?;
    create_user_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Acquire the lock on the shared database connection.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the lock is poisoned.
pub fn lock_connection(
    db_connection: &Mutex<Connection>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}
