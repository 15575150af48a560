// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget configuration: interaction mode and responsive breakpoint.

use alloc::string::String;
use core::fmt;

/// Media query used when the caller does not supply one.
pub const DEFAULT_BREAKPOINT: &str = "(min-width: 48em)";

/// How submenus are opened on large screens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    /// Submenus open when their anchor receives focus (large screens only).
    #[default]
    Hover,
    /// Submenus open only on explicit activation of their anchor.
    Click,
}

impl Action {
    /// The lowercase token used in class names and serialized configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Click => "click",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved configuration for a [`Navigation`](crate::Navigation).
///
/// Fields not supplied by the caller fall back to [`NavConfig::default`]:
/// hover interaction and the [`DEFAULT_BREAKPOINT`] media query. Lifecycle
/// hooks are not part of the configuration; subscribe to them through an
/// [`Emitter`](crate::Emitter) instead.
///
/// ```rust
/// use understory_nav::{Action, NavConfig};
///
/// let config = NavConfig::default()
///     .with_action(Action::Click)
///     .with_breakpoint("(min-width: 60em)");
/// assert_eq!(config.action, Action::Click);
/// assert_eq!(config.breakpoint, "(min-width: 60em)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Interaction mode for submenus.
    pub action: Action,
    /// Media query separating small (toggle-driven) from large screens.
    pub breakpoint: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            action: Action::default(),
            breakpoint: String::from(DEFAULT_BREAKPOINT),
        }
    }
}

impl NavConfig {
    /// Replace the interaction mode.
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Replace the breakpoint media query.
    #[must_use]
    pub fn with_breakpoint(mut self, breakpoint: impl Into<String>) -> Self {
        self.breakpoint = breakpoint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_hover_and_48em() {
        let config = NavConfig::default();
        assert_eq!(config.action, Action::Hover);
        assert_eq!(config.breakpoint, DEFAULT_BREAKPOINT);
    }

    #[test]
    fn builder_overrides_only_named_fields() {
        let config = NavConfig::default().with_action(Action::Click);
        assert_eq!(config.action, Action::Click);
        assert_eq!(config.breakpoint, DEFAULT_BREAKPOINT);
    }

    #[test]
    fn action_tokens() {
        assert_eq!(Action::Hover.as_str(), "hover");
        assert_eq!(Action::Click.as_str(), "click");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: NavConfig = serde_json::from_str(r#"{"action":"click"}"#).unwrap();
        assert_eq!(config.action, Action::Click);
        assert_eq!(config.breakpoint, DEFAULT_BREAKPOINT);

        let config: NavConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NavConfig::default());

        let config: NavConfig =
            serde_json::from_str(r#"{"breakpoint":"(min-width: 60em)"}"#).unwrap();
        assert_eq!(config.action, Action::Hover);
        assert_eq!(config.breakpoint, "(min-width: 60em)");
    }

    #[test]
    fn action_uses_lowercase_tokens() {
        assert_eq!(serde_json::to_string(&Action::Hover).unwrap(), r#""hover""#);
        assert_eq!(
            serde_json::from_str::<Action>(r#""click""#).unwrap(),
            Action::Click
        );
        assert!(serde_json::from_str::<NavConfig>(r#"{"action":"tap"}"#).is_err());
    }
}
