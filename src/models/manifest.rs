//! PWA manifest document model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::draft_defaults;

/// Well-known manifest member names edited by the form.
pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const START_URL: &str = "start_url";
    pub const DISPLAY: &str = "display";
    pub const ORIENTATION: &str = "orientation";
    pub const THEME_COLOR: &str = "theme_color";
    pub const BACKGROUND_COLOR: &str = "background_color";
}

/// A PWA manifest as edited and stored by the app.
///
/// `short_name` is the identity key: it names both the manifest directory and
/// the JSON file inside it. Every other member is kept verbatim in `members`,
/// so unknown keys (icons, shortcuts, ...) survive a load/save cycle.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Manifest {
    pub short_name: String,
    #[serde(flatten)]
    pub members: Map<String, Value>,
}

impl Manifest {
    /// Create a manifest with only a short name.
    #[cfg(test)]
    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            members: Map::new(),
        }
    }

    /// A blank draft prefilled with sensible defaults for the editor.
    pub fn draft() -> Self {
        let mut manifest = Self::default();
        manifest.set_text(fields::START_URL, draft_defaults::START_URL);
        manifest.set_text(fields::DISPLAY, draft_defaults::DISPLAY);
        manifest.set_text(fields::THEME_COLOR, draft_defaults::THEME_COLOR);
        manifest.set_text(fields::BACKGROUND_COLOR, draft_defaults::BACKGROUND_COLOR);
        manifest
    }

    /// Builder-style member setter.
    #[cfg(test)]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.members.insert(key.to_string(), value.into());
        self
    }

    /// String value of a member, or `""` when absent or not a string.
    pub fn text(&self, key: &str) -> &str {
        self.members.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Set a string member. An empty value removes the member.
    pub fn set_text(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.members.remove(key);
        } else {
            self.members
                .insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    /// Display label: `name` if set, otherwise the short name.
    pub fn label(&self) -> &str {
        match self.text(fields::NAME) {
            "" => &self.short_name,
            name => name,
        }
    }

    /// Pretty-printed JSON as shown in the preview.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
