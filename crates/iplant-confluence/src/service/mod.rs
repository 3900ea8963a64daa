//! Remote wiki service contract.
//!
//! [`WikiService`] is the seam over the wiki platform's remote
//! procedure-call interface. The session client composes a service
//! implementation instead of inheriting transport plumbing, so tests can
//! substitute an in-memory fake and production code uses [`RpcService`].

mod rpc;

pub use rpc::RpcService;

use crate::error::WikiError;
use crate::types::{Comment, CommentUpdate, NewComment, NewPage, Page};

/// Operations exposed by the remote wiki service.
///
/// Every call takes the session token explicitly; token lifecycle is the
/// caller's concern. A rejected token surfaces as
/// [`WikiError::SessionExpired`] so the caller can re-authenticate.
pub trait WikiService {
    /// Log in and obtain a fresh session token.
    fn login(&self, user: &str, password: &str) -> Result<String, WikiError>;

    /// Look up a page by title and space.
    ///
    /// Returns `Ok(None)` when no such page exists; absence is not an
    /// error at this layer.
    fn get_page(&self, token: &str, title: &str, space: &str)
    -> Result<Option<Page>, WikiError>;

    /// Store a new page, publishing it immediately.
    fn store_page(&self, token: &str, page: &NewPage) -> Result<Page, WikiError>;

    /// Add a comment to a page and return the stored comment with its
    /// assigned identifier.
    fn add_comment(&self, token: &str, comment: &NewComment) -> Result<Comment, WikiError>;

    /// Replace an existing comment.
    fn edit_comment(&self, token: &str, comment: &CommentUpdate) -> Result<(), WikiError>;

    /// Delete a comment by identifier.
    fn remove_comment(&self, token: &str, comment_id: u64) -> Result<(), WikiError>;

    /// Retrieve a comment by identifier.
    fn get_comment(&self, token: &str, comment_id: u64) -> Result<Comment, WikiError>;
}
