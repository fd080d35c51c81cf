//! Posts SDK port trait
//!
//! Typed query functions over the remote GraphQL schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Connection, Cursor, Post};
use crate::error::SdkError;

/// Variables of the `posts` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsVariables {
    pub after: Option<Cursor>,
    pub first: i64,
}

/// Result of the `posts` query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsQuery {
    pub posts: Connection<Post>,
}

/// Client for the posts GraphQL API
#[async_trait]
pub trait PostsSdk: Send + Sync {
    /// `posts(after, first)` - one page of posts
    async fn posts(&self, variables: &PostsVariables) -> Result<PostsQuery, SdkError>;

    /// `version` - version string reported by the API
    async fn version(&self) -> Result<String, SdkError>;
}
