//! Web routes and handlers
//!
//! This module defines the HTML page routes and the health probes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

mod health;
mod pages;
pub mod views;

pub use health::*;

/// Create the application router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/book", post(pages::book))
        .route("/admin/bookings", get(pages::admin_bookings))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness))
}
