//! Database operations for items.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    item::{Item, ItemId, ItemImages, NewItem},
};

/// Create an item and return it with its generated ID.
pub fn create_item(item: NewItem, connection: &Connection) -> Result<Item, Error> {
    connection.execute(
        "INSERT INTO item (name, description, price, images, category_id)
        VALUES (?1, ?2, ?3, ?4, ?5);",
        (
            &item.name,
            &item.description,
            item.price,
            item.images.to_stored(),
            item.category_id,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Item {
        id,
        name: item.name,
        description: item.description,
        price: item.price,
        images: item.images,
        category_id: item.category_id,
    })
}

/// Retrieve a single item by ID.
///
/// # Errors
///
/// Returns [Error::ItemNotFound] if no item has the ID `item_id`.
pub fn get_item(item_id: ItemId, connection: &Connection) -> Result<Item, Error> {
    connection
        .prepare(
            "SELECT id, name, description, price, images, category_id
            FROM item WHERE id = :id;",
        )?
        .query_row(&[(":id", &item_id)], map_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::ItemNotFound(item_id),
            error => error.into(),
        })
}

/// Retrieve all items in the order they were created.
pub fn get_all_items(connection: &Connection) -> Result<Vec<Item>, Error> {
    connection
        .prepare(
            "SELECT id, name, description, price, images, category_id
            FROM item ORDER BY id ASC;",
        )?
        .query_map([], map_row)?
        .map(|maybe_item| maybe_item.map_err(|error| error.into()))
        .collect()
}

/// Initialize the item table.
///
/// `category_id` is declared as a foreign key, but SQLite only enforces it
/// when `PRAGMA foreign_keys` is on, which this application does not enable.
pub fn create_item_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS item (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            price REAL NOT NULL,
            images TEXT NOT NULL DEFAULT '',
            category_id INTEGER NOT NULL,
            FOREIGN KEY(category_id) REFERENCES category(id)
        );

        CREATE INDEX IF NOT EXISTS idx_item_category_id ON item(category_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Item, rusqlite::Error> {
    let raw_images: String = row.get(4)?;

    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        images: ItemImages::from_stored(&raw_images),
        category_id: row.get(5)?,
    })
}

#[cfg(test)]
mod item_query_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        item::{ItemImages, NewItem, create_item, get_all_items, get_item},
    };

    use super::create_item_table;

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_item_table(&connection).expect("Could not create item table");
        connection
    }

    fn new_item(name: &str, images: &[&str]) -> NewItem {
        NewItem {
            name: name.to_owned(),
            description: format!("A {name}"),
            price: 12.5,
            images: ItemImages::new(images.iter().map(|image| image.to_string()).collect())
                .unwrap(),
            category_id: 1,
        }
    }

    #[test]
    fn create_item_succeeds() {
        let connection = get_test_db_connection();

        let item = create_item(new_item("Phone", &["p1.jpg"]), &connection)
            .expect("Could not create item");

        assert!(item.id > 0);
        assert_eq!(item.name, "Phone");
        assert_eq!(item.images.as_slice(), ["p1.jpg"]);
    }

    #[test]
    fn get_item_round_trips_images() {
        let connection = get_test_db_connection();
        let inserted = create_item(new_item("Lamp", &["a.png", "b.png"]), &connection)
            .expect("Could not create test item");

        let selected = get_item(inserted.id, &connection).expect("Could not get item");

        assert_eq!(selected, inserted);
        assert_eq!(selected.images.as_slice(), ["a.png", "b.png"]);
    }

    #[test]
    fn get_item_without_images_has_empty_list() {
        let connection = get_test_db_connection();
        let inserted =
            create_item(new_item("Mug", &[]), &connection).expect("Could not create test item");

        let selected = get_item(inserted.id, &connection).expect("Could not get item");

        assert!(selected.images.as_slice().is_empty());
    }

    #[test]
    fn get_item_with_invalid_id_returns_not_found() {
        let connection = get_test_db_connection();

        let selected = get_item(42, &connection);

        assert_eq!(selected, Err(Error::ItemNotFound(42)));
    }

    #[test]
    fn create_item_does_not_check_category() {
        let connection = get_test_db_connection();
        let item = NewItem {
            category_id: 999,
            ..new_item("Orphan", &[])
        };

        let inserted = create_item(item, &connection).expect("Could not create item");

        assert_eq!(inserted.category_id, 999);
    }

    #[test]
    fn get_all_items_returns_insertion_order() {
        let connection = get_test_db_connection();
        let want = vec![
            create_item(new_item("Foo", &[]), &connection).expect("Could not create item"),
            create_item(new_item("Bar", &["bar.png"]), &connection)
                .expect("Could not create item"),
        ];

        let got = get_all_items(&connection).expect("Could not get all items");

        assert_eq!(want, got);
    }
}
