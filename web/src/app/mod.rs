//! Application layer
//!
//! Client-side data fetching glue shared by the pages.

pub mod query_client;

pub use query_client::{DehydratedState, QueryClient, QueryKey};
