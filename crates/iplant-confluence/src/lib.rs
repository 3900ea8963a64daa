//! Confluence integration for the iPlant wiki tools.
//!
//! This crate provides a session-aware Confluence client:
//! - [`SessionClient`]: page and comment operations with lazy login and
//!   transparent single-shot session retry
//! - [`WikiService`]: the remote procedure-call seam, with
//!   [`RpcService`] as the JSON-RPC production implementation
//!
//! # Usage
//!
//! ```ignore
//! use iplant_config::Config;
//! use iplant_confluence::SessionClient;
//!
//! let config = Config::load(None)?;
//! let mut client = SessionClient::new(config.require_confluence()?.clone());
//!
//! let url = client.create_page("Release Notes", "<p>Hello</p>")?;
//! let comment = client.add_comment("DOC", "Release Notes", "First!")?;
//! ```

// Session-aware client
mod client;
pub use client::SessionClient;

// Remote service contract and JSON-RPC implementation
mod service;
pub use service::{RpcService, WikiService};

// Wire types
mod types;
pub use types::{Comment, CommentUpdate, NewComment, NewPage, Page};

// Errors
pub mod error;
pub use error::WikiError;
