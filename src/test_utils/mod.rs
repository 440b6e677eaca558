#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use rusqlite::Connection;

use crate::{AppState, build_router, db::initialize};

/// An in-memory database with every table created.
pub(crate) fn get_test_db_connection() -> Arc<Mutex<Connection>> {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");

    Arc::new(Mutex::new(connection))
}

/// A test server running the full application router over an in-memory database.
pub(crate) fn get_test_server() -> TestServer {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    let state = AppState::new(connection).expect("Could not create app state");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}
