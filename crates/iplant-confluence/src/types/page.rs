//! Wiki page types.

use serde::{Deserialize, Serialize};

use super::id_from_any;

/// Remote wiki page as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Numeric content identifier assigned by the remote service.
    #[serde(deserialize_with = "id_from_any")]
    pub id: u64,
    /// Space key the page lives in.
    pub space: String,
    /// Page title.
    pub title: String,
    /// Page body in storage format.
    #[serde(default)]
    pub content: String,
    /// Web URL of the page, when the service reports one.
    #[serde(default)]
    pub url: Option<String>,
}

/// Request payload for storing a new page.
#[derive(Debug, Clone, Serialize)]
pub struct NewPage {
    /// Space key to create the page in.
    pub space: String,
    /// Page title.
    pub title: String,
    /// Content identifier of the parent page.
    #[serde(rename = "parentId")]
    pub parent_id: u64,
    /// Page body in storage format.
    pub content: String,
}
