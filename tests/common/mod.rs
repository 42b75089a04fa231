//! Common test utilities and helpers
//!
//! Shared test infrastructure: an in-memory test application and an HTTP
//! test client over `tower::ServiceExt`.

pub mod test_app;

pub use test_app::*;
