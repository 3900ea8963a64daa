//! Page operations for the wiki client.

use tracing::info;

use super::SessionClient;
use crate::error::WikiError;
use crate::service::WikiService;
use crate::types::NewPage;

impl<S: WikiService> SessionClient<S> {
    /// Create a page under the configured parent page and return its
    /// public URL.
    ///
    /// Idempotent: if a page with this title already exists in the
    /// configured space it is left untouched. The page is published
    /// immediately, not stored as a draft. The returned URL is the
    /// configured space URL prefix with the title appended, whether or
    /// not a page was created.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::PageNotFound`] if the configured parent page
    /// is missing, [`WikiError::Auth`] if login fails, or the remote
    /// fault otherwise.
    pub fn create_page(&mut self, title: &str, content: &str) -> Result<String, WikiError> {
        let space = self.config.space.clone();
        let parent = self.config.parent_page.clone();

        self.call_with_session(|service, token| {
            if service.get_page(token, title, &space)?.is_some() {
                info!("Page \"{title}\" already exists in {space}");
                return Ok(());
            }
            let parent_page = service.get_page(token, &parent, &space)?.ok_or_else(|| {
                WikiError::PageNotFound {
                    title: parent.clone(),
                    space: space.clone(),
                }
            })?;
            let page = NewPage {
                space: space.clone(),
                title: title.to_owned(),
                parent_id: parent_page.id,
                content: content.to_owned(),
            };
            service.store_page(token, &page)?;
            info!("Created page \"{title}\" in {space}");
            Ok(())
        })?;

        Ok(format!("{}{}", self.config.space_url, title))
    }

    /// Resolve a page's numeric content identifier.
    ///
    /// Logs in first if no session is held; no explicit login call is
    /// required before using this.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::PageNotFound`] if no page with this title
    /// exists in the space.
    pub fn get_content_id(&mut self, title: &str, space: &str) -> Result<u64, WikiError> {
        self.call_with_session(|service, token| {
            service
                .get_page(token, title, space)?
                .map(|page| page.id)
                .ok_or_else(|| WikiError::PageNotFound {
                    title: title.to_owned(),
                    space: space.to_owned(),
                })
        })
    }
}
