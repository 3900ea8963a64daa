//! Session-aware wiki client.
//!
//! Wraps every remote call in a helper that lazily authenticates on first
//! use and transparently re-authenticates exactly once when the remote
//! service rejects the session token.

mod comments;
mod pages;

#[cfg(test)]
pub(crate) mod testing;

use iplant_config::WikiConfig;
use tracing::{error, info, warn};

use crate::error::WikiError;
use crate::service::{RpcService, WikiService};

/// Wiki client with automatic login and single-shot session retry.
///
/// Holds the configuration read-only and owns the session token. All
/// operations take `&mut self`: the token is single-writer by
/// construction, so the client is not shareable across threads without
/// external synchronization (which is the intended usage).
pub struct SessionClient<S = RpcService> {
    config: WikiConfig,
    service: S,
    token: Option<String>,
}

impl SessionClient<RpcService> {
    /// Create a client talking JSON-RPC to the configured server.
    ///
    /// No network traffic happens here; login is deferred to the first
    /// operation.
    pub fn new(config: WikiConfig) -> Self {
        let service = RpcService::new(&config.base_url);
        Self::with_service(config, service)
    }

    /// Create a client resuming an existing session token.
    ///
    /// The token is trusted until the remote service rejects it; a
    /// rejection triggers the usual re-login.
    pub fn with_token(config: WikiConfig, token: String) -> Self {
        let mut client = Self::new(config);
        client.token = Some(token);
        client
    }
}

impl<S: WikiService> SessionClient<S> {
    /// Create a client over an arbitrary service implementation.
    pub fn with_service(config: WikiConfig, service: S) -> Self {
        Self {
            config,
            service,
            token: None,
        }
    }

    /// Get the current session token, logging in first if none is held.
    ///
    /// On login failure this logs the error and returns `None` instead of
    /// propagating; callers use the token in non-critical contexts and
    /// rely on the non-failing contract.
    pub fn token(&mut self) -> Option<&str> {
        if self.token.is_none()
            && let Err(e) = self.login()
        {
            error!("Cannot login: {e}");
            return None;
        }
        self.token.as_deref()
    }

    /// Log in to the remote service and replace the session token.
    fn login(&mut self) -> Result<(), WikiError> {
        info!(
            "Logging in to {} as {}",
            self.config.base_url, self.config.user
        );
        let token = self
            .service
            .login(&self.config.user, &self.config.password)?;
        self.token = Some(token);
        Ok(())
    }

    /// Run a remote call with lazy login and single-shot session retry.
    ///
    /// Authenticates first if no token is held. If the call fails because
    /// the session was rejected, re-authenticates once and reruns the call
    /// once. Any other failure, and a second session rejection, propagates
    /// to the caller; the second rejection is reported as a remote fault
    /// rather than looping.
    fn call_with_session<T>(
        &mut self,
        call: impl Fn(&S, &str) -> Result<T, WikiError>,
    ) -> Result<T, WikiError> {
        if self.token.is_none() {
            self.login()?;
        }
        let token = self.token.clone().unwrap_or_default();

        match call(&self.service, &token) {
            Err(WikiError::SessionExpired) => {
                warn!("Session rejected by {}, logging in again", self.config.base_url);
                self.login()?;
                let token = self.token.clone().unwrap_or_default();
                call(&self.service, &token).map_err(|e| match e {
                    WikiError::SessionExpired => WikiError::Remote {
                        code: 0,
                        message: "session rejected again after re-login".to_owned(),
                    },
                    other => other,
                })
            }
            other => other,
        }
    }
}
