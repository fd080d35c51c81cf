//! Page components
//!
//! Each page renders an HTML body; the app shell wraps it in the document
//! and carries the hydrated query cache.

pub mod app;
pub mod dashboard;
pub mod error;
pub mod index;

pub use app::{AppShell, PageProps};
pub use dashboard::{get_server_side_props, render_dashboard};
pub use error::{render_error_page, ErrorPage};
pub use index::render_index;

/// Escape HTML special characters for safe inclusion in markup
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
