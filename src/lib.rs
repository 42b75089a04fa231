//! CarRental WebUI Library
//!
//! This crate provides the core functionality for the CarRental WebUI
//! application: the car catalog, the booking ledger, and the booking
//! submission workflow, served through a small set of HTML pages.

pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod utils;
pub mod web;

pub use config::AppConfig;
pub use db::DbPool;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Database connection pool
    pub db: DbPool,
}
