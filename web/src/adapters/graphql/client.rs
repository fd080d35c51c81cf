//! GraphQL API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::documents::{POSTS_QUERY, VERSION_QUERY};
use crate::domain::ports::{PostsQuery, PostsSdk, PostsVariables};
use crate::error::SdkError;

/// Implementation of the posts SDK over HTTP
pub struct GraphqlSdk {
    http: Client,
    endpoint: String,
}

impl GraphqlSdk {
    pub fn new(endpoint: &str, token: Option<&str>) -> Result<Self, SdkError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| SdkError::Config(format!("Invalid API token: {}", e)))?,
            );
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, SdkError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!(endpoint = %self.endpoint, "Sending GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(SdkError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SdkError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| SdkError::Deserialization(e.to_string()))?;

        body.into_data()
    }
}

/// Request body for a GraphQL operation
#[derive(Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Serialize)]
struct NoVariables {}

/// Response envelope for a GraphQL operation
#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

impl<T> GraphqlResponse<T> {
    fn into_data(self) -> Result<T, SdkError> {
        if !self.errors.is_empty() {
            return Err(SdkError::Graphql(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(SdkError::MissingData)
    }
}

#[derive(Deserialize)]
struct VersionResponse {
    version: String,
}

#[async_trait]
impl PostsSdk for GraphqlSdk {
    async fn posts(&self, variables: &PostsVariables) -> Result<PostsQuery, SdkError> {
        self.execute(POSTS_QUERY, variables).await
    }

    async fn version(&self) -> Result<String, SdkError> {
        let response: VersionResponse = self.execute(VERSION_QUERY, NoVariables {}).await?;
        Ok(response.version)
    }
}
