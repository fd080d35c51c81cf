//! Domain ports (traits)
//!
//! Port traits define interfaces that the pages require.
//! Adapters provide concrete implementations of these traits.

pub mod sdk;

pub use sdk::{PostsQuery, PostsSdk, PostsVariables};
