//! # Host Context
//!
//! The read-only environment the host supplies once at bridge
//! initialization: who the user is, which color scheme is active, the
//! theme palette, and the platform string.
//!
//! Captured once during startup; read-only to the rest of the system.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Color Scheme
// =============================================================================

/// The host's active color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Light
    }
}

// =============================================================================
// Theme Params
// =============================================================================

/// Named color roles the host theme can supply.
///
/// These are the roles the presentation surface maps onto its own
/// variables; anything the host does not provide falls back to the
/// storefront defaults.
pub mod roles {
    pub const BG_COLOR: &str = "bg_color";
    pub const TEXT_COLOR: &str = "text_color";
    pub const HINT_COLOR: &str = "hint_color";
    pub const BUTTON_COLOR: &str = "button_color";
    pub const BUTTON_TEXT_COLOR: &str = "button_text_color";
}

/// Mapping of named color roles to color values.
///
/// A `BTreeMap` keeps role iteration deterministic, which keeps log
/// output and tests stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeParams(BTreeMap<String, String>);

impl ThemeParams {
    /// An empty palette (every role falls back to defaults).
    pub fn empty() -> Self {
        ThemeParams(BTreeMap::new())
    }

    /// Sets a color role. Builder-style, used by hosts and tests.
    pub fn with(mut self, role: &str, value: &str) -> Self {
        self.0.insert(role.to_string(), value.to_string());
        self
    }

    /// Looks up a color role.
    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }

    /// Looks up a color role with a fallback value.
    pub fn get_or<'a>(&'a self, role: &str, fallback: &'a str) -> &'a str {
        self.get(role).unwrap_or(fallback)
    }

    /// Whether the host supplied no overrides at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Host User
// =============================================================================

/// Opaque identity record supplied by the host.
///
/// The storefront never interprets it beyond echoing it back inside the
/// checkout payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

// =============================================================================
// Host Context
// =============================================================================

/// Everything the host tells us about its environment, captured once at
/// bridge initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    /// Identity of the user the host authenticated, when present.
    pub user: Option<HostUser>,

    /// Active color scheme.
    pub color_scheme: ColorScheme,

    /// Theme palette overrides.
    pub theme_params: ThemeParams,

    /// Host platform string ("ios", "android", "web", ...).
    pub platform: String,

    /// Host API version string.
    pub version: String,
}

impl HostContext {
    /// The fixed context used when no host is present: light scheme, no
    /// theme overrides, platform "standalone".
    pub fn standalone() -> Self {
        HostContext {
            user: None,
            color_scheme: ColorScheme::Light,
            theme_params: ThemeParams::empty(),
            platform: "standalone".to_string(),
            version: "0".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_context() {
        let ctx = HostContext::standalone();
        assert_eq!(ctx.color_scheme, ColorScheme::Light);
        assert!(ctx.theme_params.is_empty());
        assert_eq!(ctx.platform, "standalone");
        assert!(ctx.user.is_none());
    }

    #[test]
    fn test_theme_fallbacks() {
        let theme = ThemeParams::empty().with(roles::BG_COLOR, "#1c1c1d");

        assert_eq!(theme.get_or(roles::BG_COLOR, "#ffffff"), "#1c1c1d");
        assert_eq!(theme.get_or(roles::TEXT_COLOR, "#000000"), "#000000");
        assert!(theme.get(roles::BUTTON_COLOR).is_none());
    }

    #[test]
    fn test_user_serializes_without_empty_username() {
        let user = HostUser {
            id: 99,
            first_name: "Olena".into(),
            username: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 99);
        assert!(json.get("username").is_none());
    }
}
