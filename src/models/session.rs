//! Authentication and startup state.

use serde::{Deserialize, Serialize};

/// Outcome of session initialization reported by the webnative SDK.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// The user just came back from the auth lobby.
    AuthSucceeded,
    /// A previously authorised session was restored.
    Continuation,
    /// No session; the user has to log in.
    NotAuthorised,
    /// The user cancelled in the auth lobby.
    AuthCancelled,
}

impl Scenario {
    /// Parse the SDK's scenario tag (e.g. `"AUTH_SUCCEEDED"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AUTH_SUCCEEDED" => Some(Self::AuthSucceeded),
            "CONTINUATION" => Some(Self::Continuation),
            "NOT_AUTHORISED" => Some(Self::NotAuthorised),
            "AUTH_CANCELLED" => Some(Self::AuthCancelled),
            _ => None,
        }
    }

    /// The SDK tag for this scenario.
    pub fn tag(self) -> &'static str {
        match self {
            Self::AuthSucceeded => "AUTH_SUCCEEDED",
            Self::Continuation => "CONTINUATION",
            Self::NotAuthorised => "NOT_AUTHORISED",
            Self::AuthCancelled => "AUTH_CANCELLED",
        }
    }

    /// Whether this scenario carries a usable filesystem.
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::AuthSucceeded | Self::Continuation)
    }
}

/// Payload of an auth change notification.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthInfo {
    pub username: String,
}

/// Authentication state as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Initializing,
    SignedIn(AuthInfo),
    SignedOut,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    /// Format for the header: username, or a placeholder.
    pub fn display_name(&self) -> String {
        match self {
            Self::SignedIn(info) => info.username.clone(),
            Self::Initializing => "connecting...".to_string(),
            Self::SignedOut => "guest".to_string(),
        }
    }
}

impl From<Option<AuthInfo>> for AuthState {
    fn from(info: Option<AuthInfo>) -> Self {
        info.map(Self::SignedIn).unwrap_or(Self::SignedOut)
    }
}

/// Controller startup phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartupPhase {
    #[default]
    Initializing,
    AuthResolved,
    Ready,
}

/// Permissions requested from the SDK, serialized as
/// `{ "app": { "name": ..., "creator": ... } }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppPermissions {
    pub app: AppIdentity,
}

/// Application identity used to scope the storage namespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppIdentity {
    pub name: String,
    pub creator: String,
}

impl AppPermissions {
    pub fn new(name: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            app: AppIdentity {
                name: name.into(),
                creator: creator.into(),
            },
        }
    }
}

/// Values captured once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Flags {
    pub identity: AppIdentity,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_tags() {
        for scenario in [
            Scenario::AuthSucceeded,
            Scenario::Continuation,
            Scenario::NotAuthorised,
            Scenario::AuthCancelled,
        ] {
            assert_eq!(Scenario::from_tag(scenario.tag()), Some(scenario));
        }
        assert_eq!(Scenario::from_tag("SOMETHING_ELSE"), None);
    }

    #[test]
    fn test_authenticated_scenarios() {
        assert!(Scenario::AuthSucceeded.is_authenticated());
        assert!(Scenario::Continuation.is_authenticated());
        assert!(!Scenario::NotAuthorised.is_authenticated());
        assert!(!Scenario::AuthCancelled.is_authenticated());
    }

    #[test]
    fn test_auth_state_display() {
        let signed_in = AuthState::from(Some(AuthInfo {
            username: "alice".to_string(),
        }));
        assert!(signed_in.is_signed_in());
        assert_eq!(signed_in.display_name(), "alice");
        assert_eq!(AuthState::from(None).display_name(), "guest");
        assert_eq!(AuthState::default(), AuthState::Initializing);
    }

    #[test]
    fn test_permissions_shape() {
        let permissions = AppPermissions::new("pwa-generator", "bgins");
        let value = serde_json::to_value(&permissions).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "app": { "name": "pwa-generator", "creator": "bgins" } })
        );
    }
}
