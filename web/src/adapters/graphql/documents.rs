//! Query documents sent to the posts service

pub const POSTS_QUERY: &str = r#"query posts($after: Cursor, $first: Int!) {
  posts(after: $after, first: $first) {
    edges {
      cursor
      node {
        createdAt
        id
        slug
        updatedAt
      }
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
    }
  }
}"#;

pub const VERSION_QUERY: &str = "query version { version }";
