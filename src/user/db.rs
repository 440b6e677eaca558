//! Code for creating the user table and reading and writing users.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    user::{NewUser, User, UserId},
};

/// Create the user table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                cart TEXT NOT NULL DEFAULT ''
                )",
        (),
    )?;

    Ok(())
}

/// Create and insert a new user into the database.
///
/// # Errors
///
/// Returns a [Error::SqlError] if an SQL related error occurred.
pub fn create_user(user: NewUser, connection: &Connection) -> Result<User, Error> {
    connection.execute(
        "INSERT INTO user (name, email, cart) VALUES (?1, ?2, ?3)",
        (&user.name, &user.email, &user.cart),
    )?;

    let id = UserId::new(connection.last_insert_rowid());

    Ok(User {
        id,
        name: user.name,
        email: user.email,
        cart: user.cart,
    })
}

/// Get the user from the database with an ID equal to `user_id`.
///
/// # Errors
///
/// This function will return an error if:
/// - `user_id` does not belong to a user, [Error::UserNotFound].
/// - there was an error trying to access the store.
pub fn get_user(user_id: UserId, connection: &Connection) -> Result<User, Error> {
    connection
        .prepare("SELECT id, name, email, cart FROM user WHERE id = :id")?
        .query_row(&[(":id", &user_id.as_i64())], map_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UserNotFound(user_id),
            error => error.into(),
        })
}

/// Get every user in the order they were created.
pub fn get_all_users(connection: &Connection) -> Result<Vec<User>, Error> {
    connection
        .prepare("SELECT id, name, email, cart FROM user ORDER BY id ASC")?
        .query_map([], map_row)?
        .map(|maybe_user| maybe_user.map_err(|error| error.into()))
        .collect()
}

/// Replace the cart of the user with the ID `user_id` and return the updated user.
///
/// # Errors
///
/// Returns [Error::UserNotFound] if `user_id` does not belong to a user.
pub fn update_user_cart(user_id: UserId, cart: &str, connection: &Connection) -> Result<User, Error> {
    let rows_affected = connection.execute(
        "UPDATE user SET cart = ?1 WHERE id = ?2",
        (cart, user_id.as_i64()),
    )?;

    if rows_affected == 0 {
        return Err(Error::UserNotFound(user_id));
    }

    get_user(user_id, connection)
}

fn map_row(row: &Row) -> Result<User, rusqlite::Error> {
    let raw_id = row.get(0)?;

    Ok(User {
        id: UserId::new(raw_id),
        name: row.get(1)?,
        email: row.get(2)?,
        cart: row.get(3)?,
    })
}
