// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use alloc::string::String;

/// A fatal condition detected while binding a [`Navigation`](crate::Navigation)
/// to its document.
///
/// Every variant is logged at `error` level before it is returned. When
/// construction fails nothing has been written to the document and no
/// listener has been bound.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// The target selector was empty.
    #[error("no target supplied; a valid target (menu) must be used")]
    MissingTarget,
    /// The target selector did not resolve to an element.
    #[error("target `{selector}` not found; a valid target (menu) must be used")]
    TargetNotFound {
        /// The selector that was queried.
        selector: String,
    },
    /// No element carries `data-responsive-nav-control` pointing at the menu.
    #[error("no menu toggle found for menu `{menu_id}`; a valid menu toggle must be used")]
    ToggleNotFound {
        /// The menu identifier the toggle was looked up with (may be empty).
        menu_id: String,
    },
    /// The menu element has no `id`, or an empty one.
    #[error("target `{selector}` (menu) must have a valid ID attribute")]
    MissingMenuId {
        /// The selector that located the menu.
        selector: String,
    },
}
