//! GraphQL adapter
//!
//! HTTP implementation of the posts SDK.

pub mod client;
pub mod documents;

pub use client::GraphqlSdk;
