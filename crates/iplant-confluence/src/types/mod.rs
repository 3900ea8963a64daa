//! Wiki API types.

mod comment;
mod page;

pub use comment::{Comment, CommentUpdate, NewComment};
pub use page::{NewPage, Page};

use serde::{Deserialize, Deserializer};

/// Deserialize a numeric id that the remote service may send either as a
/// JSON number or as a decimal string.
pub(crate) fn id_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
