use std::env;

/// Page size used by the dashboard when none is configured
pub const DEFAULT_POSTS_PAGE_SIZE: i64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    /// GraphQL endpoint of the posts service
    pub graphql_url: String,
    /// Optional bearer token sent with every GraphQL request
    pub graphql_token: Option<String>,
    pub port: u16,
    /// Number of posts requested per dashboard page
    pub posts_page_size: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            graphql_url: env::var("GRAPHQL_URL")
                .unwrap_or_else(|_| "http://localhost:4000/".to_string()),
            graphql_token: env::var("GRAPHQL_TOKEN").ok().filter(|t| !t.is_empty()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            posts_page_size: env::var("POSTS_PAGE_SIZE")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n: &i64| *n > 0)
                .unwrap_or(DEFAULT_POSTS_PAGE_SIZE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_url: "http://localhost:4000/".to_string(),
            graphql_token: None,
            port: 3000,
            posts_page_size: DEFAULT_POSTS_PAGE_SIZE,
        }
    }
}
