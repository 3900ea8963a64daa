//! Wiki comment types.

use serde::{Deserialize, Serialize};

use super::id_from_any;

/// Remote comment as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Comment identifier assigned by the remote service.
    #[serde(deserialize_with = "id_from_any")]
    pub id: u64,
    /// Content identifier of the page the comment is attached to.
    #[serde(rename = "pageId", deserialize_with = "id_from_any")]
    pub page_id: u64,
    /// Comment text body.
    pub content: String,
    /// Web URL of the comment, when the service reports one.
    #[serde(default)]
    pub url: Option<String>,
}

/// Request payload for adding a comment to a page.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    /// Content identifier of the page to comment on.
    #[serde(rename = "pageId")]
    pub page_id: u64,
    /// Comment text body.
    pub content: String,
}

/// Request payload for replacing an existing comment.
#[derive(Debug, Clone, Serialize)]
pub struct CommentUpdate {
    /// Identifier of the comment to replace.
    pub id: u64,
    /// Service address the comment belongs to.
    pub url: String,
    /// Replacement text body.
    pub content: String,
}
