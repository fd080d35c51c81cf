//! Domain entities
//!
//! Snapshots of data owned by the remote posts service.

pub mod connection;
pub mod post;

pub use connection::{Connection, Cursor};
pub use post::Post;
