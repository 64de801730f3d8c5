//! Application controller.
//!
//! Owns the startup sequence and turns UI [`Command`]s into storage calls
//! and [`Event`]s. The filesystem handle is held in a [`Workspace`] so a
//! command that arrives before startup resolves gets a typed
//! [`StoreError::NotReady`] instead of touching an unset handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};

use crate::core::error::{AppError, StoreError};
use crate::core::session::{SessionBridge, Workspace};
use crate::core::store::ManifestStore;
use crate::models::{Command, Event, StartupPhase};
use crate::utils::clipboard::ClipboardWriter;

pub struct Controller {
    bridge: Rc<dyn SessionBridge>,
    clipboard: Rc<dyn ClipboardWriter>,
    workspace: RefCell<Workspace>,
    phase: Cell<StartupPhase>,
}

impl Controller {
    pub fn new(bridge: Rc<dyn SessionBridge>, clipboard: Rc<dyn ClipboardWriter>) -> Self {
        Self {
            bridge,
            clipboard,
            workspace: RefCell::new(Workspace::NotReady),
            phase: Cell::new(StartupPhase::Initializing),
        }
    }

    pub fn phase(&self) -> StartupPhase {
        self.phase.get()
    }

    fn store(&self) -> Result<ManifestStore, StoreError> {
        self.workspace.borrow().store()
    }

    /// Run the startup sequence, reporting progress through `emit`.
    ///
    /// 1. Resolve the session.
    /// 2. Signed in: announce the user, ensure the app directory exists and
    ///    load every manifest. Signed out: announce `None` and stop.
    ///
    /// Login stays available whatever the outcome.
    pub async fn start(&self, emit: impl Fn(Event)) -> Result<(), AppError> {
        let session = match self.bridge.initialize().await {
            Ok(session) => session,
            Err(e) => {
                warn!("session initialization failed: {e}");
                *self.workspace.borrow_mut() = Workspace::Unavailable;
                self.phase.set(StartupPhase::Ready);
                emit(Event::AuthChanged(None));
                return Err(e.into());
            }
        };
        self.phase.set(StartupPhase::AuthResolved);

        let auth = session.auth_info();
        emit(Event::AuthChanged(auth.clone()));

        let (Some(auth), Some(fs)) = (auth, session.fs) else {
            info!("no session ({})", session.scenario.tag());
            *self.workspace.borrow_mut() = Workspace::Unavailable;
            self.phase.set(StartupPhase::Ready);
            return Ok(());
        };

        info!("signed in as {}", auth.username);
        let store = ManifestStore::new(fs);
        *self.workspace.borrow_mut() = Workspace::Ready(store.clone());

        store.ensure_root().await?;
        self.phase.set(StartupPhase::Ready);

        let manifests = store.list().await?;
        emit(Event::ManifestsLoaded(manifests));
        Ok(())
    }

    /// Reload the manifest list.
    pub async fn refresh(&self) -> Result<Event, AppError> {
        let manifests = self.store()?.list().await?;
        Ok(Event::ManifestsLoaded(manifests))
    }

    /// Handle one UI command. Commands without a reply yield `None`.
    pub async fn handle(&self, command: Command) -> Result<Option<Event>, AppError> {
        match command {
            Command::Login => {
                self.bridge.redirect_to_login().await?;
                Ok(None)
            }
            Command::Save(manifest) => {
                self.store()?.save(&manifest).await?;
                Ok(Some(Event::ManifestSaved(manifest)))
            }
            Command::Delete(manifest) => {
                self.store()?.delete(&manifest).await?;
                Ok(Some(Event::ManifestDeleted(manifest)))
            }
            Command::Load(short_name) => {
                let manifest = self.store()?.load(&short_name).await?;
                Ok(Some(Event::ManifestLoaded(manifest)))
            }
            Command::CopyToClipboard(element_id) => {
                self.clipboard.copy_element_text(&element_id)?;
                Ok(Some(Event::Copied(element_id)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ClipboardError, SessionError};
    use crate::core::fs::{FileSystem, FsPath};
    use crate::core::session::Session;
    use crate::core::{MemoryFs, OfflineBridge};
    use crate::models::{AuthInfo, Manifest, Scenario, fields};
    use async_trait::async_trait;

    /// Records copy requests; fails for ids starting with "missing".
    #[derive(Default)]
    struct FakeClipboard {
        copied: RefCell<Vec<String>>,
    }

    impl ClipboardWriter for FakeClipboard {
        fn copy_element_text(&self, element_id: &str) -> Result<(), ClipboardError> {
            if element_id.starts_with("missing") {
                return Err(ClipboardError::ElementNotFound(element_id.to_string()));
            }
            self.copied.borrow_mut().push(element_id.to_string());
            Ok(())
        }
    }

    struct FailingBridge;

    #[async_trait(?Send)]
    impl SessionBridge for FailingBridge {
        async fn initialize(&self) -> Result<Session, SessionError> {
            Err(SessionError::SdkMissing)
        }

        async fn redirect_to_login(&self) -> Result<(), SessionError> {
            Err(SessionError::SdkMissing)
        }
    }

    fn controller_with(bridge: Rc<OfflineBridge>) -> (Controller, Rc<FakeClipboard>) {
        let clipboard = Rc::new(FakeClipboard::default());
        (Controller::new(bridge, clipboard.clone()), clipboard)
    }

    async fn start_collecting(controller: &Controller) -> (Result<(), AppError>, Vec<Event>) {
        let events = RefCell::new(Vec::new());
        let result = controller
            .start(|event| events.borrow_mut().push(event))
            .await;
        (result, events.into_inner())
    }

    fn alice() -> Option<AuthInfo> {
        Some(AuthInfo {
            username: "alice".to_string(),
        })
    }

    #[tokio::test]
    async fn test_new_auth_fresh_account() {
        let bridge = Rc::new(OfflineBridge::signed_in("alice"));
        let fs = bridge.fs();
        let (controller, _) = controller_with(bridge);

        let (result, events) = start_collecting(&controller).await;

        assert!(result.is_ok());
        assert_eq!(
            events,
            vec![Event::AuthChanged(alice()), Event::ManifestsLoaded(vec![])]
        );
        assert!(fs.is_dir(&FsPath::root()));
        assert_eq!(fs.publish_count(), 1);
        assert_eq!(controller.phase(), StartupPhase::Ready);
    }

    #[tokio::test]
    async fn test_continuation_loads_existing_manifests() {
        let fs = Rc::new(MemoryFs::new());
        fs.insert_file(
            &FsPath::from_segments(["myapp", "myapp.json"]),
            r#"{"short_name":"myapp","name":"My App"}"#,
        );
        let bridge = Rc::new(OfflineBridge::new(Scenario::Continuation, "alice", fs.clone()));
        let (controller, _) = controller_with(bridge);

        let (_, events) = start_collecting(&controller).await;

        assert_eq!(
            events[1],
            Event::ManifestsLoaded(vec![Manifest::new("myapp").with(fields::NAME, "My App")])
        );
        // Root already existed: no mkdir, no publish.
        assert!(!fs.calls().iter().any(|c| c.starts_with("mkdir")));
        assert_eq!(fs.publish_count(), 0);
    }

    #[tokio::test]
    async fn test_unauthorized_touches_no_filesystem() {
        for scenario in [Scenario::NotAuthorised, Scenario::AuthCancelled] {
            let fs = Rc::new(MemoryFs::new());
            let bridge = Rc::new(OfflineBridge::new(scenario, "alice", fs.clone()));
            let (controller, _) = controller_with(bridge);

            let (result, events) = start_collecting(&controller).await;

            assert!(result.is_ok());
            assert_eq!(events, vec![Event::AuthChanged(None)]);
            assert!(fs.calls().is_empty());
            assert_eq!(controller.phase(), StartupPhase::Ready);
            assert_eq!(
                controller
                    .handle(Command::Save(Manifest::new("myapp")))
                    .await,
                Err(AppError::Store(StoreError::Unavailable))
            );
        }
    }

    #[tokio::test]
    async fn test_session_failure_signs_out() {
        let controller = Controller::new(Rc::new(FailingBridge), Rc::new(FakeClipboard::default()));
        let events = RefCell::new(Vec::new());

        let result = controller
            .start(|event| events.borrow_mut().push(event))
            .await;

        assert_eq!(result, Err(AppError::Session(SessionError::SdkMissing)));
        assert_eq!(events.into_inner(), vec![Event::AuthChanged(None)]);
        assert_eq!(
            controller.handle(Command::Load("x".to_string())).await,
            Err(AppError::Store(StoreError::Unavailable))
        );
    }

    #[tokio::test]
    async fn test_commands_before_startup_are_not_ready() {
        let (controller, _) = controller_with(Rc::new(OfflineBridge::signed_in("alice")));
        assert_eq!(controller.phase(), StartupPhase::Initializing);
        assert_eq!(
            controller
                .handle(Command::Delete(Manifest::new("myapp")))
                .await,
            Err(AppError::Store(StoreError::NotReady))
        );
    }

    #[tokio::test]
    async fn test_save_then_refresh() {
        let bridge = Rc::new(OfflineBridge::signed_in("alice"));
        let fs = bridge.fs();
        let (controller, _) = controller_with(bridge);
        start_collecting(&controller).await.0.unwrap();

        let manifest = Manifest::new("myapp").with(fields::NAME, "My App");
        let event = controller
            .handle(Command::Save(manifest.clone()))
            .await
            .unwrap();

        assert_eq!(event, Some(Event::ManifestSaved(manifest.clone())));
        assert!(fs.is_dir(&FsPath::from_segments(["myapp"])));
        let stored = fs
            .read(&FsPath::from_segments(["myapp", "myapp.json"]))
            .await
            .unwrap();
        assert_eq!(
            serde_json::from_str::<Manifest>(&stored).unwrap(),
            manifest
        );
        assert_eq!(
            controller.refresh().await.unwrap(),
            Event::ManifestsLoaded(vec![manifest])
        );
    }

    #[tokio::test]
    async fn test_delete_and_load() {
        let (controller, _) = controller_with(Rc::new(OfflineBridge::signed_in("alice")));
        start_collecting(&controller).await.0.unwrap();
        let manifest = Manifest::new("myapp");
        controller
            .handle(Command::Save(manifest.clone()))
            .await
            .unwrap();

        assert_eq!(
            controller
                .handle(Command::Load("myapp".to_string()))
                .await
                .unwrap(),
            Some(Event::ManifestLoaded(manifest.clone()))
        );
        assert_eq!(
            controller
                .handle(Command::Delete(manifest.clone()))
                .await
                .unwrap(),
            Some(Event::ManifestDeleted(manifest))
        );
        assert_eq!(
            controller.refresh().await.unwrap(),
            Event::ManifestsLoaded(vec![])
        );
    }

    #[tokio::test]
    async fn test_corrupt_manifest_blocks_initial_listing() {
        let fs = Rc::new(MemoryFs::new());
        fs.insert_file(&FsPath::from_segments(["good", "good.json"]), r#"{"short_name":"good"}"#);
        fs.insert_file(&FsPath::from_segments(["bad", "bad.json"]), "not json");
        let bridge = Rc::new(OfflineBridge::new(Scenario::Continuation, "alice", fs));
        let (controller, _) = controller_with(bridge);

        let (result, events) = start_collecting(&controller).await;

        assert!(matches!(
            result,
            Err(AppError::Store(StoreError::Parse { .. }))
        ));
        assert_eq!(events, vec![Event::AuthChanged(alice())]);
        assert_eq!(controller.phase(), StartupPhase::Ready);
        // Still usable for saves.
        assert_eq!(
            controller
                .handle(Command::Save(Manifest::new("good")))
                .await,
            Ok(Some(Event::ManifestSaved(Manifest::new("good"))))
        );
    }

    #[tokio::test]
    async fn test_login_redirects_in_every_scenario() {
        for scenario in [Scenario::AuthSucceeded, Scenario::NotAuthorised] {
            let bridge = Rc::new(OfflineBridge::new(scenario, "alice", Rc::new(MemoryFs::new())));
            let (controller, _) = controller_with(bridge.clone());
            start_collecting(&controller).await.0.unwrap();

            assert_eq!(controller.handle(Command::Login).await, Ok(None));
            assert_eq!(bridge.redirect_count(), 1);
        }
    }

    #[tokio::test]
    async fn test_copy_to_clipboard() {
        let (controller, clipboard) = controller_with(Rc::new(OfflineBridge::signed_in("alice")));

        assert_eq!(
            controller
                .handle(Command::CopyToClipboard("manifest-json".to_string()))
                .await,
            Ok(Some(Event::Copied("manifest-json".to_string())))
        );
        assert_eq!(*clipboard.copied.borrow(), ["manifest-json"]);

        assert_eq!(
            controller
                .handle(Command::CopyToClipboard("missing".to_string()))
                .await,
            Err(AppError::Clipboard(ClipboardError::ElementNotFound(
                "missing".to_string()
            )))
        );
    }
}
