//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::entities::connection::PageInfo;
use crate::domain::entities::{Connection, Post};
use crate::domain::ports::{PostsQuery, PostsSdk, PostsVariables};
use crate::error::SdkError;

// ============================================================================
// Mock Posts SDK
// ============================================================================

pub struct MockPostsSdk {
    page: Connection<Post>,
    fail_status: Option<u16>,
    version: String,
    calls: Mutex<Vec<PostsVariables>>,
}

impl Default for MockPostsSdk {
    fn default() -> Self {
        Self {
            page: Connection {
                edges: Vec::new(),
                page_info: PageInfo::default(),
            },
            fail_status: None,
            version: "v0.1.0".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockPostsSdk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this page for every `posts` query
    pub fn with_page(mut self, page: Connection<Post>) -> Self {
        self.page = page;
        self
    }

    /// Fail every query as if the API answered 503
    pub fn failing(self) -> Self {
        self.failing_with_status(503)
    }

    pub fn failing_with_status(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    /// Variables of every `posts` query received so far
    pub fn calls(&self) -> Vec<PostsVariables> {
        self.calls.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), SdkError> {
        match self.fail_status {
            Some(status) => Err(SdkError::Api {
                status,
                message: "mock failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostsSdk for MockPostsSdk {
    async fn posts(&self, variables: &PostsVariables) -> Result<PostsQuery, SdkError> {
        self.calls.lock().unwrap().push(variables.clone());
        self.check_failure()?;
        Ok(PostsQuery {
            posts: self.page.clone(),
        })
    }

    async fn version(&self) -> Result<String, SdkError> {
        self.check_failure()?;
        Ok(self.version.clone())
    }
}
