//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Manifest`] - PWA manifest documents
//! - [`Scenario`], [`AuthState`], [`AuthInfo`] - Session and authentication state
//! - [`Command`], [`Event`] - Typed messages between the UI and the controller

mod manifest;
mod message;
mod session;

pub use manifest::{Manifest, fields};
pub use message::{Command, Event};
pub use session::{AppIdentity, AppPermissions, AuthInfo, AuthState, Flags, Scenario, StartupPhase};
