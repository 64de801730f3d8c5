//! Typed commands (UI to controller) and events (controller to UI).

use super::{AuthInfo, Manifest};

/// A user intent dispatched by the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Redirect to the Fission auth lobby.
    Login,
    /// Persist a manifest, creating its directory if needed.
    Save(Manifest),
    /// Remove a manifest's JSON file.
    Delete(Manifest),
    /// Read a single manifest by short name.
    Load(String),
    /// Copy the text of the element with this id.
    CopyToClipboard(String),
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Save(_) => "save",
            Self::Delete(_) => "delete",
            Self::Load(_) => "load",
            Self::CopyToClipboard(_) => "copyToClipboard",
        }
    }
}

/// A one-way notification from the controller to the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    AuthChanged(Option<AuthInfo>),
    ManifestsLoaded(Vec<Manifest>),
    ManifestSaved(Manifest),
    ManifestDeleted(Manifest),
    ManifestLoaded(Manifest),
    /// Text of the element with this id was copied.
    Copied(String),
}
