//! HTTP handlers
//!
//! Axum request handlers serving the pages.

pub mod pages;

pub use pages::{dashboard, index, not_found};
