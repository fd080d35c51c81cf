//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::connection::{CursorPosition, Edge, PageInfo};
use crate::domain::entities::post::PostId;
use crate::domain::entities::{Connection, Post};

/// Create a test post with the given slug
pub fn test_post(slug: &str) -> Post {
    let created_at = Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap();
    Post {
        id: PostId(Uuid::new_v4()),
        slug: slug.to_string(),
        created_at,
        updated_at: created_at,
    }
}

/// Wrap posts in a single-page connection, cursors numbered from 1
pub fn test_connection(posts: Vec<Post>) -> Connection<Post> {
    let edges = posts
        .into_iter()
        .enumerate()
        .map(|(i, node)| Edge {
            cursor: CursorPosition {
                rowid: i as i32 + 1,
                ty: "Post".to_string(),
            }
            .encode()
            .unwrap(),
            node,
        })
        .collect();

    Connection {
        edges,
        page_info: PageInfo::default(),
    }
}
