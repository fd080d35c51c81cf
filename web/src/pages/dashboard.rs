//! Dashboard page
//!
//! Posts are prefetched while building page props, then rendered through the
//! hydrated cache under the same key, so a request normally costs one query.

use serde_json::json;

use crate::app::{QueryClient, QueryKey};
use crate::domain::entities::{Cursor, Post};
use crate::domain::ports::{PostsQuery, PostsSdk, PostsVariables};
use crate::error::SdkError;

use super::app::PageProps;
use super::escape_html;

/// Cache key of one page of posts: `["posts", after]`
pub fn posts_query_key(after: Option<&Cursor>) -> QueryKey {
    QueryKey::new(vec![json!("posts"), json!(after)])
}

/// Prefetch the requested page of posts and hand its snapshot to the shell
pub async fn get_server_side_props(
    sdk: &dyn PostsSdk,
    after: Option<&Cursor>,
    first: i64,
) -> PageProps {
    let client = QueryClient::new();
    let variables = PostsVariables {
        after: after.cloned(),
        first,
    };

    client
        .prefetch_query(&posts_query_key(after), || sdk.posts(&variables))
        .await;

    PageProps {
        dehydrated_state: Some(client.dehydrate().await),
    }
}

/// Dashboard body. Reads through `client`; only queries `sdk` on a cache miss.
pub async fn render_dashboard(
    client: &QueryClient,
    sdk: &dyn PostsSdk,
    after: Option<&Cursor>,
    first: i64,
) -> Result<String, SdkError> {
    let variables = PostsVariables {
        after: after.cloned(),
        first,
    };
    let data: PostsQuery = client
        .fetch_query(&posts_query_key(after), || sdk.posts(&variables))
        .await?;

    let mut buf = String::new();
    buf.push_str("        <ul>\n");
    for post in data.posts.nodes() {
        buf.push_str(&render_post(post));
    }
    buf.push_str("        </ul>\n");

    if let Some(cursor) = data.posts.next_cursor() {
        buf.push_str(&format!(
            "        <a href=\"/dashboard?after={}\">Next</a>\n",
            urlencoding::encode(cursor.as_str())
        ));
    }

    Ok(buf)
}

fn render_post(post: &Post) -> String {
    let json = serde_json::to_string_pretty(post).unwrap_or_default();

    format!(
        "            <li data-key=\"{}\">\n                <pre>{}</pre>\n            </li>\n",
        post.id,
        escape_html(&json)
    )
}
