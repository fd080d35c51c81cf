//! Keyed query cache with dehydrate/hydrate support
//!
//! Pages fetch through a `QueryClient` so that data prefetched while preparing
//! page props can be handed to the render step without fetching twice. The
//! cache is request-scoped: one client prefetches, its snapshot travels in the
//! page props, and the app shell hydrates a fresh client from it.
//!
//! Entries never expire and are never evicted.

use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;

use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

/// Ordered list of JSON values identifying a query, e.g. `["posts", null]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryKey(Vec<Value>);

impl QueryKey {
    pub fn new(parts: Vec<Value>) -> Self {
        Self(parts)
    }

    /// Stable string form used to index the cache
    pub fn hash(&self) -> String {
        Value::Array(self.0.clone()).to_string()
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hash())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub data: Value,
    /// Milliseconds since the Unix epoch
    pub data_updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedQuery {
    pub query_key: QueryKey,
    pub query_hash: String,
    pub state: QueryState,
}

/// Serializable snapshot of every successful query in a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DehydratedState {
    pub queries: Vec<DehydratedQuery>,
}

impl DehydratedState {
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

struct CachedQuery {
    key: QueryKey,
    state: QueryState,
}

#[derive(Default)]
pub struct QueryClient {
    queries: RwLock<HashMap<String, CachedQuery>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fetcher` unless `key` already has data. Failures are logged and
    /// leave the key empty; they are never returned.
    pub async fn prefetch_query<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F)
    where
        T: Serialize,
        E: Display,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if self.queries.read().await.contains_key(&key.hash()) {
            tracing::debug!(key = %key, "Prefetch skipped, query already cached");
            return;
        }

        match fetcher().await {
            Ok(data) => self.set_query_data(key, &data).await,
            Err(e) => tracing::warn!(key = %key, "Prefetch failed: {}", e),
        }
    }

    /// Cached data for `key` if present, otherwise the result of `fetcher`,
    /// which is cached on success.
    pub async fn fetch_query<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(data) = self.get_query_data(key).await {
            tracing::debug!(key = %key, "Query served from cache");
            return Ok(data);
        }

        let data = fetcher().await?;
        self.set_query_data(key, &data).await;
        Ok(data)
    }

    pub async fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let queries = self.queries.read().await;
        let cached = queries.get(&key.hash())?;

        match serde_json::from_value(cached.state.data.clone()) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(key = %key, "Cached data has unexpected shape: {}", e);
                None
            }
        }
    }

    pub async fn set_query_data<T: Serialize>(&self, key: &QueryKey, data: &T) {
        let data = match serde_json::to_value(data) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(key = %key, "Query data is not serializable: {}", e);
                return;
            }
        };

        self.queries.write().await.insert(
            key.hash(),
            CachedQuery {
                key: key.clone(),
                state: QueryState {
                    data,
                    data_updated_at: Utc::now().timestamp_millis(),
                },
            },
        );
    }

    /// Snapshot every cached query, ordered by hash
    pub async fn dehydrate(&self) -> DehydratedState {
        let queries = self.queries.read().await;
        let mut dehydrated: Vec<DehydratedQuery> = queries
            .iter()
            .map(|(hash, cached)| DehydratedQuery {
                query_key: cached.key.clone(),
                query_hash: hash.clone(),
                state: cached.state.clone(),
            })
            .collect();
        dehydrated.sort_by(|a, b| a.query_hash.cmp(&b.query_hash));

        DehydratedState {
            queries: dehydrated,
        }
    }

    /// Load a snapshot. Keys that already hold data are left untouched.
    pub async fn hydrate(&self, state: &DehydratedState) {
        let mut queries = self.queries.write().await;
        for query in &state.queries {
            let hash = query.query_key.hash();
            if queries.contains_key(&hash) {
                continue;
            }
            queries.insert(
                hash,
                CachedQuery {
                    key: query.query_key.clone(),
                    state: query.state.clone(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;

    fn posts_key(after: Option<&str>) -> QueryKey {
        QueryKey::new(vec![json!("posts"), json!(after)])
    }

    #[test]
    fn key_hash_is_structural() {
        assert_eq!(posts_key(None).hash(), r#"["posts",null]"#);
        assert_ne!(posts_key(None).hash(), posts_key(Some("abc")).hash());
    }

    #[tokio::test]
    async fn prefetch_stores_successful_result() {
        let client = QueryClient::new();

        client
            .prefetch_query(&posts_key(None), || async { Ok::<_, String>(vec![1, 2, 3]) })
            .await;

        let data: Option<Vec<i32>> = client.get_query_data(&posts_key(None)).await;
        assert_eq!(data, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn prefetch_swallows_errors() {
        let client = QueryClient::new();

        client
            .prefetch_query(&posts_key(None), || async {
                Err::<Vec<i32>, _>("connection refused".to_string())
            })
            .await;

        assert!(client.get_query_data::<Vec<i32>>(&posts_key(None)).await.is_none());
        assert!(client.dehydrate().await.is_empty());
    }

    #[tokio::test]
    async fn prefetch_does_not_refetch_cached_key() {
        let client = QueryClient::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            client
                .prefetch_query(&posts_key(None), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(1)
                })
                .await;
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fetch_query_uses_hydrated_data() {
        let server = QueryClient::new();
        server
            .prefetch_query(&posts_key(None), || async { Ok::<_, String>("cached") })
            .await;
        let state = server.dehydrate().await;

        let client = QueryClient::new();
        client.hydrate(&state).await;

        let calls = AtomicUsize::new(0);
        let data: Result<String, String> = client
            .fetch_query(&posts_key(None), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("fresh".to_string())
            })
            .await;

        assert_eq!(data.unwrap(), "cached");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetch_query_fetches_other_keys() {
        let client = QueryClient::new();
        client.set_query_data(&posts_key(None), &"first page").await;

        let data: Result<String, String> = client
            .fetch_query(&posts_key(Some("abc")), || async {
                Ok("second page".to_string())
            })
            .await;

        assert_eq!(data.unwrap(), "second page");
        assert_eq!(client.dehydrate().await.queries.len(), 2);
    }

    #[tokio::test]
    async fn fetch_query_propagates_errors_without_caching() {
        let client = QueryClient::new();

        let result: Result<i32, String> = client
            .fetch_query(&posts_key(None), || async { Err("boom".to_string()) })
            .await;

        assert_eq!(result.unwrap_err(), "boom");
        assert!(client.dehydrate().await.is_empty());
    }

    #[tokio::test]
    async fn hydrate_keeps_existing_data() {
        let client = QueryClient::new();
        client.set_query_data(&posts_key(None), &"local").await;

        let other = QueryClient::new();
        other.set_query_data(&posts_key(None), &"remote").await;
        client.hydrate(&other.dehydrate().await).await;

        let data: Option<String> = client.get_query_data(&posts_key(None)).await;
        assert_eq!(data.as_deref(), Some("local"));
    }

    #[tokio::test]
    async fn dehydrated_state_serializes_in_camel_case() {
        let client = QueryClient::new();
        client.set_query_data(&posts_key(None), &json!({ "ok": true })).await;

        let value = serde_json::to_value(client.dehydrate().await).unwrap();
        let query = &value["queries"][0];

        assert_eq!(query["queryKey"], json!(["posts", null]));
        assert_eq!(query["queryHash"], json!(r#"["posts",null]"#));
        assert_eq!(query["state"]["data"], json!({ "ok": true }));
        assert!(query["state"]["dataUpdatedAt"].is_i64());
    }

    #[tokio::test]
    async fn mismatched_type_reads_as_miss() {
        let client = QueryClient::new();
        client.set_query_data(&posts_key(None), &"text").await;

        assert!(client.get_query_data::<Vec<i32>>(&posts_key(None)).await.is_none());
    }
}
