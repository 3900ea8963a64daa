//! In-memory wiki service fake for client tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use iplant_config::WikiConfig;

use crate::error::WikiError;
use crate::service::WikiService;
use crate::types::{Comment, CommentUpdate, NewComment, NewPage, Page};

/// Config pointing at a fictional wiki, matching the mock's seed data.
pub(crate) fn test_config() -> WikiConfig {
    WikiConfig {
        base_url: "https://wiki.example.org".to_owned(),
        user: "wiki-bot".to_owned(),
        password: "hunter2".to_owned(),
        space: "DOC".to_owned(),
        parent_page: "List of Applications".to_owned(),
        space_url: "https://wiki.example.org/docs/".to_owned(),
    }
}

fn seed_page(id: u64, title: &str) -> Page {
    Page {
        id,
        space: "DOC".to_owned(),
        title: title.to_owned(),
        content: String::new(),
        url: None,
    }
}

/// Fake [`WikiService`] with canned pages and scriptable failures.
///
/// Seeded with the configured parent page (id 7) and an existing "Guide"
/// page (id 100) in space DOC.
pub(crate) struct MockService {
    login_calls: Cell<usize>,
    fail_logins: Cell<bool>,
    expire_next: Cell<usize>,
    pages: RefCell<Vec<Page>>,
    stored: RefCell<Vec<NewPage>>,
    comments: RefCell<HashMap<u64, Comment>>,
    next_id: Cell<u64>,
}

impl Default for MockService {
    fn default() -> Self {
        Self {
            login_calls: Cell::new(0),
            fail_logins: Cell::new(false),
            expire_next: Cell::new(0),
            pages: RefCell::new(vec![
                seed_page(7, "List of Applications"),
                seed_page(100, "Guide"),
            ]),
            stored: RefCell::new(Vec::new()),
            comments: RefCell::new(HashMap::new()),
            next_id: Cell::new(500),
        }
    }
}

impl MockService {
    /// Number of login calls observed so far.
    pub(crate) fn login_calls(&self) -> usize {
        self.login_calls.get()
    }

    /// Make every login attempt fail.
    pub(crate) fn fail_logins(&self) {
        self.fail_logins.set(true);
    }

    /// Reject the next `n` non-login calls with a session fault.
    pub(crate) fn expire_next_calls(&self, n: usize) {
        self.expire_next.set(n);
    }

    /// Pages stored through [`WikiService::store_page`].
    pub(crate) fn stored_pages(&self) -> Vec<NewPage> {
        self.stored.borrow().clone()
    }

    fn gate(&self) -> Result<(), WikiError> {
        let pending = self.expire_next.get();
        if pending > 0 {
            self.expire_next.set(pending - 1);
            return Err(WikiError::SessionExpired);
        }
        Ok(())
    }

    fn fresh_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl WikiService for MockService {
    fn login(&self, _user: &str, _password: &str) -> Result<String, WikiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        if self.fail_logins.get() {
            return Err(WikiError::Auth("invalid credentials".to_owned()));
        }
        Ok(format!("token-{}", self.login_calls.get()))
    }

    fn get_page(
        &self,
        _token: &str,
        title: &str,
        space: &str,
    ) -> Result<Option<Page>, WikiError> {
        self.gate()?;
        Ok(self
            .pages
            .borrow()
            .iter()
            .find(|p| p.title == title && p.space == space)
            .cloned())
    }

    fn store_page(&self, _token: &str, page: &NewPage) -> Result<Page, WikiError> {
        self.gate()?;
        let stored = Page {
            id: self.fresh_id(),
            space: page.space.clone(),
            title: page.title.clone(),
            content: page.content.clone(),
            url: None,
        };
        self.pages.borrow_mut().push(stored.clone());
        self.stored.borrow_mut().push(page.clone());
        Ok(stored)
    }

    fn add_comment(&self, _token: &str, comment: &NewComment) -> Result<Comment, WikiError> {
        self.gate()?;
        let stored = Comment {
            id: self.fresh_id(),
            page_id: comment.page_id,
            content: comment.content.clone(),
            url: None,
        };
        self.comments.borrow_mut().insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn edit_comment(&self, _token: &str, comment: &CommentUpdate) -> Result<(), WikiError> {
        self.gate()?;
        match self.comments.borrow_mut().get_mut(&comment.id) {
            Some(existing) => {
                existing.content.clone_from(&comment.content);
                Ok(())
            }
            None => Err(WikiError::Remote {
                code: 500,
                message: format!("comment {} not found", comment.id),
            }),
        }
    }

    fn remove_comment(&self, _token: &str, comment_id: u64) -> Result<(), WikiError> {
        self.gate()?;
        match self.comments.borrow_mut().remove(&comment_id) {
            Some(_) => Ok(()),
            None => Err(WikiError::Remote {
                code: 500,
                message: format!("comment {comment_id} not found"),
            }),
        }
    }

    fn get_comment(&self, _token: &str, comment_id: u64) -> Result<Comment, WikiError> {
        self.gate()?;
        self.comments
            .borrow()
            .get(&comment_id)
            .cloned()
            .ok_or(WikiError::Remote {
                code: 500,
                message: format!("comment {comment_id} not found"),
            })
    }
}
