//! App shell
//!
//! Wraps every page in the shared document and rehydrates server-fetched
//! query data into the cache the page renders from.

use crate::app::{DehydratedState, QueryClient};
use crate::error::AppError;

use super::escape_html;

/// Element id of the embedded dehydrated query state
pub const QUERY_STATE_ELEMENT_ID: &str = "__QUERY_STATE__";

/// Props produced while preparing a page on the server
#[derive(Debug, Clone, Default)]
pub struct PageProps {
    pub dehydrated_state: Option<DehydratedState>,
}

pub struct AppShell {
    client: QueryClient,
    dehydrated_state: Option<DehydratedState>,
}

impl AppShell {
    /// Create the render-scoped query client and load the page's snapshot into it
    pub async fn hydrate(props: PageProps) -> Self {
        let client = QueryClient::new();
        if let Some(state) = props.dehydrated_state.as_ref().filter(|s| !s.is_empty()) {
            tracing::debug!(queries = state.queries.len(), "Hydrating query cache");
            client.hydrate(state).await;
        }

        Self {
            client,
            dehydrated_state: props.dehydrated_state,
        }
    }

    pub fn client(&self) -> &QueryClient {
        &self.client
    }

    /// Page body wrapped in the document, with the page's snapshot embedded
    pub fn render(&self, title: &str, body: &str) -> Result<String, AppError> {
        let state_script = match &self.dehydrated_state {
            Some(state) => render_state_script(state)?,
            None => String::new(),
        };
        Ok(render_document(title, body, &state_script))
    }
}

/// Full HTML document around a page body
pub fn render_document(title: &str, body: &str, state_script: &str) -> String {
    let title = escape_html(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="https://unpkg.com/tailwindcss@2/dist/tailwind.min.css">
</head>
<body>
    <div class="bg-white dark:bg-gray-800 h-screen w-screen">
{body}
    </div>
{state_script}</body>
</html>"#
    )
}

fn render_state_script(state: &DehydratedState) -> Result<String, AppError> {
    let json = serde_json::to_string(state)
        .map_err(|e| AppError::Internal(format!("Failed to serialize dehydrated state: {}", e)))?;

    // Keep "</script>" inside string values from closing the element
    let json = json.replace('<', "\\u003c");

    Ok(format!(
        "    <script id=\"{QUERY_STATE_ELEMENT_ID}\" type=\"application/json\">{json}</script>\n"
    ))
}
