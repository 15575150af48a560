// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input forwarded by the host, and what the widget did with it.

use ui_events::keyboard::Key;

/// An event the host forwards to [`Navigation::handle`](crate::Navigation::handle).
///
/// Hosts translate their native events into these: a DOM `click` on an
/// element becomes [`NavInput::Click`], a `keyup` on the document becomes
/// [`NavInput::KeyUp`], and so on. Inputs for targets the widget never bound
/// a listener to are ignored.
#[derive(Clone, Debug, PartialEq)]
pub enum NavInput<N> {
    /// Activation of an element (pointer click, tap, or Enter on a link).
    ///
    /// If the element's handler does not stop propagation the click
    /// continues to the document, closing open submenus.
    Click(N),
    /// A click that reached the document without an element target inside
    /// the page content.
    DocumentClick,
    /// An element received keyboard focus.
    Focus(N),
    /// A key was released anywhere in the document.
    KeyUp(Key),
    /// The breakpoint media query changed its match state.
    MediaChange,
}

/// What handling an input did to the native event.
///
/// Mirrors the DOM's `preventDefault` / `stopPropagation` so hosts can apply
/// them to the native event they translated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The host should suppress the default action (for example following
    /// a link).
    pub default_prevented: bool,
    /// The event should not bubble further.
    pub propagation_stopped: bool,
}

impl Response {
    /// Default prevented and propagation stopped.
    pub(crate) const CONSUMED: Self = Self {
        default_prevented: true,
        propagation_stopped: true,
    };

    /// Whether the event was fully consumed.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        self.default_prevented && self.propagation_stopped
    }
}
