// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class tokens and attribute names written to, or read from, the document.
//!
//! Class names are scoped with a `TenUp__navigation` prefix so they do not
//! collide with host styles.

/// Class tokens applied during decoration and state transitions.
pub mod class {
    /// Enclosing `nav` landmark.
    pub const NAVIGATION: &str = "TenUp__navigation";
    /// Root menu and every submenu.
    pub const MENU: &str = "TenUp__navigation__menu";
    /// Root menu only.
    pub const MENU_MAIN: &str = "TenUp__navigation__menu--main";
    /// Root menu in [`Action::Click`](crate::Action::Click) mode.
    pub const MENU_CLICK: &str = "TenUp__navigation__menu--click";
    /// Root menu in [`Action::Hover`](crate::Action::Hover) mode.
    pub const MENU_HOVER: &str = "TenUp__navigation__menu--hover";
    /// Root menu while opened through the toggle.
    pub const MENU_OPEN: &str = "TenUp__navigation__menu--is-open";
    /// Every nested list.
    pub const SUBMENU: &str = "TenUp__navigation__menu--submenu";
    /// Nested list while open.
    pub const SUBMENU_OPEN: &str = "TenUp__navigation__menu--submenu-is-open";
    /// Anchor preceding a nested list.
    pub const SUBMENU_ANCHOR: &str = "TenUp__navigation__submenu-parent-anchor";
    /// Every `li` inside the root menu.
    pub const MENU_ITEM: &str = "TenUp__navigation__menu-item";
    /// Toggle control.
    pub const TOGGLE: &str = "TenUp__navigation__menu-toggle";
    /// Toggle control while the menu is open.
    pub const TOGGLE_OPEN: &str = "TenUp__navigation__menu-toggle--is-open";
    /// Document element before scripting is active.
    pub const NO_JS: &str = "no-js";
    /// Document element once the widget is active.
    pub const JS: &str = "js";
}

/// Attribute names.
pub mod attr {
    /// Element identifier.
    pub const ID: &str = "id";
    /// Link target.
    pub const HREF: &str = "href";
    /// Attribute on the toggle naming the menu it controls.
    pub const NAV_CONTROL: &str = "data-responsive-nav-control";
    /// `aria-hidden`.
    pub const ARIA_HIDDEN: &str = "aria-hidden";
    /// `aria-expanded`.
    pub const ARIA_EXPANDED: &str = "aria-expanded";
    /// `aria-controls`.
    pub const ARIA_CONTROLS: &str = "aria-controls";
    /// `aria-haspopup`.
    pub const ARIA_HASPOPUP: &str = "aria-haspopup";
    /// `aria-label`.
    pub const ARIA_LABEL: &str = "aria-label";
}

/// Element names the widget recognizes structurally.
pub mod tag {
    /// Landmark wrapping the menu.
    pub const NAV: &str = "nav";
    /// A list: the root menu and every submenu.
    pub const LIST: &str = "ul";
    /// A list item.
    pub const ITEM: &str = "li";
    /// A link.
    pub const ANCHOR: &str = "a";
}

/// Prefix for generated submenu identifiers (`tenUp-submenu-<index>`).
pub const SUBMENU_ID_PREFIX: &str = "tenUp-submenu-";

/// Accessible label applied to every submenu.
pub const SUBMENU_LABEL: &str = "Submenu";

/// String form of a boolean ARIA value.
#[must_use]
pub const fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
