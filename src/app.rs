//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the glue
//! that forwards UI commands to the [`Controller`] and applies its events
//! to reactive state.

use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;

use crate::components::{Editor, Header, ManifestList, Preview, StatusLine};
use crate::config::{APP_CREATOR, APP_NAME, STATUS_TIMEOUT_MS};
use crate::core::error::AppError;
use crate::core::{Controller, SessionBridge};
use crate::models::{AppIdentity, AuthState, Command, Event, Flags, Manifest};
use crate::utils::clipboard::DomClipboard;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// Status Messages
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A transient message shown under the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: StatusKind,
    pub text: String,
}

// ============================================================================
// List Updates
// ============================================================================

/// Insert or replace a manifest by short name, keeping the list sorted.
pub fn upsert_manifest(list: &mut Vec<Manifest>, manifest: Manifest) {
    match list
        .iter_mut()
        .find(|m| m.short_name == manifest.short_name)
    {
        Some(existing) => *existing = manifest,
        None => {
            list.push(manifest);
            list.sort_by(|a, b| a.short_name.cmp(&b.short_name));
        }
    }
}

/// Remove a manifest by short name.
pub fn remove_manifest(list: &mut Vec<Manifest>, short_name: &str) {
    list.retain(|m| m.short_name != short_name);
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// Components never talk to storage directly. They call [`AppContext::dispatch`]
/// with a [`Command`]; the controller runs it and the resulting [`Event`] is
/// applied here.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authentication state shown in the header.
    pub auth: RwSignal<AuthState>,
    /// Manifests stored in the user's filesystem.
    pub manifests: RwSignal<Vec<Manifest>>,
    /// Manifest being edited.
    pub draft: RwSignal<Manifest>,
    /// Current status line message.
    pub status: RwSignal<Option<StatusMessage>>,
    /// Startup values (app identity, viewport).
    pub flags: StoredValue<Flags>,
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    next_status_id: StoredValue<u64>,
}

impl AppContext {
    pub fn new(flags: Flags, controller: Controller) -> Self {
        Self {
            auth: RwSignal::new(AuthState::default()),
            manifests: RwSignal::new(Vec::new()),
            draft: RwSignal::new(Manifest::draft()),
            status: RwSignal::new(None),
            flags: StoredValue::new(flags),
            controller: StoredValue::new_local(Rc::new(controller)),
            next_status_id: StoredValue::new(0),
        }
    }

    /// Run the controller's startup sequence.
    pub fn start(&self) {
        let ctx = *self;
        let controller = self.controller.get_value();
        spawn_local(async move {
            if let Err(e) = controller.start(move |event| ctx.apply(event)).await {
                error!("startup failed: {e}");
                ctx.report(e);
            }
            debug!("startup finished in phase {:?}", controller.phase());
        });
    }

    /// Send a command to the controller.
    pub fn dispatch(&self, command: Command) {
        let ctx = *self;
        let controller = self.controller.get_value();
        spawn_local(async move {
            let name = command.name();
            match controller.handle(command).await {
                Ok(Some(event)) => ctx.apply(event),
                Ok(None) => {}
                Err(e) => {
                    error!("{name} failed: {e}");
                    ctx.report(e);
                }
            }
        });
    }

    /// Reload the manifest list from storage.
    pub fn refresh(&self) {
        let ctx = *self;
        let controller = self.controller.get_value();
        spawn_local(async move {
            match controller.refresh().await {
                Ok(event) => ctx.apply(event),
                Err(e) => ctx.report(e),
            }
        });
    }

    /// Apply a controller event to reactive state.
    pub fn apply(&self, event: Event) {
        match event {
            Event::AuthChanged(info) => self.auth.set(AuthState::from(info)),
            Event::ManifestsLoaded(manifests) => self.manifests.set(manifests),
            Event::ManifestSaved(manifest) => {
                let text = format!("Saved {}", manifest.short_name);
                self.manifests.update(|list| upsert_manifest(list, manifest));
                self.notify(StatusKind::Success, text);
            }
            Event::ManifestDeleted(manifest) => {
                self.manifests
                    .update(|list| remove_manifest(list, &manifest.short_name));
                self.notify(
                    StatusKind::Info,
                    format!("Deleted {}", manifest.short_name),
                );
            }
            Event::ManifestLoaded(manifest) => self.draft.set(manifest),
            Event::Copied(_) => self.notify(StatusKind::Success, "Copied to clipboard"),
        }
    }

    /// Show a status message that clears itself after a timeout.
    pub fn notify(&self, kind: StatusKind, text: impl Into<String>) {
        let id = self.next_status_id.get_value() + 1;
        self.next_status_id.set_value(id);
        self.status.set(Some(StatusMessage {
            id,
            kind,
            text: text.into(),
        }));

        let status = self.status;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(STATUS_TIMEOUT_MS).await;
            status.update(|current| {
                if current.as_ref().is_some_and(|s| s.id == id) {
                    *current = None;
                }
            });
        });
    }

    fn report(&self, e: AppError) {
        self.notify(StatusKind::Error, e.to_string());
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.with(AuthState::is_signed_in)
    }
}

// ============================================================================
// Startup
// ============================================================================

/// Capture the values passed once at startup.
fn startup_flags() -> Flags {
    let (width, height) = dom::viewport_size();
    Flags {
        identity: AppIdentity {
            name: APP_NAME.to_string(),
            creator: APP_CREATOR.to_string(),
        },
        width,
        height,
    }
}

#[cfg(not(feature = "mock"))]
fn session_bridge(flags: &Flags) -> Rc<dyn SessionBridge> {
    use crate::core::webnative::WebnativeBridge;
    use crate::models::AppPermissions;

    Rc::new(WebnativeBridge::new(AppPermissions {
        app: flags.identity.clone(),
    }))
}

#[cfg(feature = "mock")]
fn session_bridge(flags: &Flags) -> Rc<dyn SessionBridge> {
    use crate::config::MOCK_USERNAME;
    use crate::core::OfflineBridge;

    log::info!("mock build: offline session for {}", flags.identity.name);
    Rc::new(OfflineBridge::signed_in(MOCK_USERNAME))
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates the controller and provides the global AppContext
/// - Starts the session once on mount
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let flags = startup_flags();
    log::info!("starting with viewport {}x{}", flags.width, flags.height);
    let controller = Controller::new(session_bridge(&flags), Rc::new(DomClipboard));
    let ctx = AppContext::new(flags, controller);
    provide_context(ctx);

    let started = StoredValue::new(false);
    Effect::new(move || {
        if !started.get_value() {
            started.set_value(true);
            ctx.start();
        }
    });

    let narrow = ctx.flags.with_value(|f| dom::is_narrow(f.width));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #c0392b;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| dom::reload()>"Reload Page"</button>
                </div>
            }
        >
            <Layout narrow=narrow />
        </ErrorBoundary>
    }
}

/// Two-column editor layout (stacked on narrow screens).
#[component]
fn Layout(narrow: bool) -> impl IntoView {
    let main_class = if narrow { css::mainNarrow } else { css::main };

    view! {
        <div class=css::screen>
            <Header />
            <StatusLine />
            <main class=main_class>
                <section class=css::column>
                    <Editor />
                </section>
                <section class=css::column>
                    <Preview />
                    <ManifestList />
                </section>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fields;

    fn names(list: &[Manifest]) -> Vec<&str> {
        list.iter().map(|m| m.short_name.as_str()).collect()
    }

    #[test]
    fn test_upsert_inserts_sorted() {
        let mut list = vec![Manifest::new("alpha"), Manifest::new("zeta")];
        upsert_manifest(&mut list, Manifest::new("mid"));
        assert_eq!(names(&list), ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut list = vec![Manifest::new("myapp")];
        let renamed = Manifest::new("myapp").with(fields::NAME, "Renamed");
        upsert_manifest(&mut list, renamed.clone());
        assert_eq!(list, vec![renamed]);
    }

    #[test]
    fn test_remove_manifest() {
        let mut list = vec![Manifest::new("a"), Manifest::new("b")];
        remove_manifest(&mut list, "a");
        assert_eq!(names(&list), ["b"]);
        remove_manifest(&mut list, "missing");
        assert_eq!(names(&list), ["b"]);
    }
}
