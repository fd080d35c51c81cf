//! Relay-style cursor pagination types
//!
//! The posts service wraps every listed node in an edge carrying an opaque
//! cursor. Requesting `after: <cursor>` continues the listing past that node.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::CursorError;

/// Opaque position token attached to an edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(pub String);

impl Cursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the service's cursor format: base64 of `{"_rowid": .., "ty": ..}`
    pub fn decode(&self) -> Result<CursorPosition, CursorError> {
        let bytes = general_purpose::STANDARD.decode(self.0.as_bytes())?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded cursor contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    #[serde(rename = "_rowid")]
    pub rowid: i32,
    pub ty: String,
}

#[cfg(test)]
impl CursorPosition {
    pub fn encode(&self) -> Result<Cursor, CursorError> {
        let json = serde_json::to_vec(self)?;
        Ok(Cursor(general_purpose::STANDARD.encode(json)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub cursor: Cursor,
    pub node: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// A page of edges plus paging flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// Cursor to pass as `after` for the following page, if there is one
    pub fn next_cursor(&self) -> Option<&Cursor> {
        if self.page_info.has_next_page {
            self.edges.last().map(|edge| &edge.cursor)
        } else {
            None
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }
}
