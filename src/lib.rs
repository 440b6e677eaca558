//! Shopfront is a small e-commerce data service.
//!
//! This library provides a JSON REST API for creating and reading categories,
//! items and users, and for replacing a user's cart. Data is stored in SQLite.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
mod db;
pub mod endpoints;
mod error;
mod item;
mod logging;
mod not_found;
mod routing;
mod user;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, CategoryId, CategoryName, NewCategory, create_category};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use item::{Item, ItemId, ItemImages, NewItem, create_item};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use user::{NewUser, User, UserId, create_user};

/// How long in-flight requests get to finish once shutdown starts.
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// Wait for Ctrl+C or, on Unix, SIGTERM, then tell the server behind `handle`
/// to stop accepting connections and drain within [SHUTDOWN_GRACE_PERIOD].
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let received = tokio::select! {
        () = ctrl_c() => "Ctrl+C",
        () = terminate() => "SIGTERM",
    };

    tracing::info!("Received {received}, shutting down.");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
}

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!("could not listen for Ctrl+C: {error}");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(error) => {
            tracing::error!("could not listen for SIGTERM: {error}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
