//! Session bridge seam and workspace readiness.

use std::rc::Rc;

use async_trait::async_trait;

use crate::core::error::{SessionError, StoreError};
use crate::core::fs::FileSystem;
use crate::core::store::ManifestStore;
use crate::models::{AuthInfo, Scenario};

/// Result of session initialization.
pub struct Session {
    pub scenario: Scenario,
    pub username: Option<String>,
    /// Present for authenticated scenarios only.
    pub fs: Option<Rc<dyn FileSystem>>,
}

impl Session {
    /// Auth payload for the UI, `None` unless authenticated.
    pub fn auth_info(&self) -> Option<AuthInfo> {
        self.scenario.is_authenticated().then(|| AuthInfo {
            username: self.username.clone().unwrap_or_default(),
        })
    }
}

/// Authentication provider: the webnative SDK in the browser, an in-memory
/// stand-in for tests and `mock` builds.
#[async_trait(?Send)]
pub trait SessionBridge {
    /// Resolve the current session. Called once at startup.
    async fn initialize(&self) -> Result<Session, SessionError>;

    /// Send the user to the login flow. Usually navigates away.
    async fn redirect_to_login(&self) -> Result<(), SessionError>;
}

/// Filesystem availability for command handlers.
#[derive(Clone, Default)]
pub enum Workspace {
    /// Startup has not resolved the session yet.
    #[default]
    NotReady,
    /// Signed in; manifests can be stored.
    Ready(ManifestStore),
    /// Signed out or cancelled; no filesystem for this page session.
    Unavailable,
}

impl Workspace {
    /// The store, or the reason there is none.
    pub fn store(&self) -> Result<ManifestStore, StoreError> {
        match self {
            Self::Ready(store) => Ok(store.clone()),
            Self::NotReady => Err(StoreError::NotReady),
            Self::Unavailable => Err(StoreError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryFs;

    #[test]
    fn test_workspace_store_reasons() {
        assert_eq!(Workspace::NotReady.store().err(), Some(StoreError::NotReady));
        assert_eq!(
            Workspace::Unavailable.store().err(),
            Some(StoreError::Unavailable)
        );
        let ready = Workspace::Ready(ManifestStore::new(Rc::new(MemoryFs::new())));
        assert!(ready.store().is_ok());
    }

    #[test]
    fn test_auth_info_only_when_authenticated() {
        let session = Session {
            scenario: Scenario::Continuation,
            username: Some("alice".to_string()),
            fs: None,
        };
        assert_eq!(
            session.auth_info(),
            Some(AuthInfo {
                username: "alice".to_string()
            })
        );

        let session = Session {
            scenario: Scenario::AuthCancelled,
            username: Some("alice".to_string()),
            fs: None,
        };
        assert_eq!(session.auth_info(), None);
    }
}
