//! Comment operations for the wiki client.

use tracing::info;

use super::SessionClient;
use crate::error::WikiError;
use crate::service::WikiService;
use crate::types::{Comment, CommentUpdate, NewComment};

impl<S: WikiService> SessionClient<S> {
    /// Add a comment to an existing page and return the stored comment
    /// with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::PageNotFound`] if no page with this title
    /// exists in the space.
    pub fn add_comment(
        &mut self,
        space: &str,
        page_title: &str,
        text: &str,
    ) -> Result<Comment, WikiError> {
        let page = self
            .call_with_session(|service, token| service.get_page(token, page_title, space))?
            .ok_or_else(|| WikiError::PageNotFound {
                title: page_title.to_owned(),
                space: space.to_owned(),
            })?;

        let comment = NewComment {
            page_id: page.id,
            content: text.to_owned(),
        };
        let stored =
            self.call_with_session(|service, token| service.add_comment(token, &comment))?;
        info!("Added comment {} to page {}", stored.id, page.id);
        Ok(stored)
    }

    /// Replace an existing comment's text.
    ///
    /// The comment must already exist; no existence check is performed
    /// here, so an unknown identifier surfaces as the remote service's
    /// fault.
    pub fn edit_comment(&mut self, comment_id: u64, new_text: &str) -> Result<(), WikiError> {
        let update = CommentUpdate {
            id: comment_id,
            url: self.config.base_url.clone(),
            content: new_text.to_owned(),
        };
        self.call_with_session(|service, token| service.edit_comment(token, &update))
    }

    /// Delete a comment by identifier. No confirmation of prior
    /// existence.
    pub fn remove_comment(&mut self, comment_id: u64) -> Result<(), WikiError> {
        self.call_with_session(|service, token| service.remove_comment(token, comment_id))
    }

    /// Retrieve a comment's text body.
    pub fn get_comment(&mut self, comment_id: u64) -> Result<String, WikiError> {
        let comment =
            self.call_with_session(|service, token| service.get_comment(token, comment_id))?;
        Ok(comment.content)
    }
}
