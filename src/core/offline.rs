//! In-memory session bridge for `mock` builds and tests.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use log::info;

use crate::core::error::SessionError;
use crate::core::fs::FileSystem;
use crate::core::memory_fs::MemoryFs;
use crate::core::session::{Session, SessionBridge};
use crate::models::Scenario;

/// Session bridge that resolves to a fixed scenario over a [`MemoryFs`].
pub struct OfflineBridge {
    scenario: Scenario,
    username: String,
    fs: Rc<MemoryFs>,
    redirects: Cell<usize>,
}

impl OfflineBridge {
    pub fn new(scenario: Scenario, username: impl Into<String>, fs: Rc<MemoryFs>) -> Self {
        Self {
            scenario,
            username: username.into(),
            fs,
            redirects: Cell::new(0),
        }
    }

    /// An authenticated session with a fresh, empty filesystem.
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self::new(
            Scenario::AuthSucceeded,
            username,
            Rc::new(MemoryFs::new()),
        )
    }

    /// The filesystem handed out to authenticated sessions.
    #[cfg(test)]
    pub fn fs(&self) -> Rc<MemoryFs> {
        self.fs.clone()
    }

    /// Number of login redirects requested.
    #[cfg(test)]
    pub fn redirect_count(&self) -> usize {
        self.redirects.get()
    }
}

#[async_trait(?Send)]
impl SessionBridge for OfflineBridge {
    async fn initialize(&self) -> Result<Session, SessionError> {
        let authenticated = self.scenario.is_authenticated();
        Ok(Session {
            scenario: self.scenario,
            username: authenticated.then(|| self.username.clone()),
            fs: authenticated.then(|| self.fs.clone() as Rc<dyn FileSystem>),
        })
    }

    async fn redirect_to_login(&self) -> Result<(), SessionError> {
        info!("offline session: login redirect skipped");
        self.redirects.set(self.redirects.get() + 1);
        Ok(())
    }
}
