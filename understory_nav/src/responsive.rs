// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-dependent ARIA state.
//!
//! Applied once during decoration and again on every breakpoint crossing.
//! Both functions only write attributes, so applying them repeatedly for the
//! same viewport is idempotent.

use crate::document::Document;
use crate::markup::{aria_bool, attr};
use crate::submenu::SubmenuTree;

/// Menu and toggle visibility for the current viewport.
///
/// On large screens the menu is always visible and the toggle is
/// superfluous, so it is hidden from assistive technology.
pub(crate) fn apply_menu_a11y<D: Document>(
    doc: &mut D,
    menu: D::Node,
    toggle: D::Node,
    large: bool,
) {
    doc.set_attribute(menu, attr::ARIA_HIDDEN, aria_bool(!large));
    doc.set_attribute(toggle, attr::ARIA_EXPANDED, aria_bool(large));
    doc.set_attribute(toggle, attr::ARIA_HIDDEN, aria_bool(large));
}

/// Hide every submenu from assistive technology.
///
/// The open-state class is not touched, so a submenu open at the moment of a
/// crossing keeps its class while reporting `aria-hidden="true"`.
pub(crate) fn apply_submenu_a11y<D: Document>(doc: &mut D, submenus: &SubmenuTree<D::Node>) {
    for (_, submenu) in submenus.iter() {
        doc.set_attribute(submenu.list, attr::ARIA_HIDDEN, aria_bool(true));
    }
}
