// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle events and a multi-subscriber emitter.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_nav::{Emitter, NavEvent, NavEventKind};
//!
//! let opened = Rc::new(Cell::new(0));
//! let mut events = Emitter::new();
//! let seen = opened.clone();
//! let sub = events.subscribe(NavEventKind::Open, move |_| seen.set(seen.get() + 1));
//!
//! events.emit(&NavEvent::Open);
//! events.emit(&NavEvent::Close);
//! assert_eq!(opened.get(), 1);
//!
//! assert!(events.unsubscribe(sub));
//! events.emit(&NavEvent::Open);
//! assert_eq!(opened.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::submenu::SubmenuIndex;

/// Something the widget did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavEvent {
    /// Construction finished; decoration and listeners are in place.
    Create,
    /// The root menu was opened with the toggle.
    Open,
    /// The root menu was closed with the toggle.
    Close,
    /// A submenu opened.
    SubmenuOpen(SubmenuIndex),
    /// A submenu closed.
    SubmenuClose(SubmenuIndex),
}

impl NavEvent {
    /// The payload-free kind of this event.
    #[must_use]
    pub const fn kind(&self) -> NavEventKind {
        match self {
            Self::Create => NavEventKind::Create,
            Self::Open => NavEventKind::Open,
            Self::Close => NavEventKind::Close,
            Self::SubmenuOpen(_) => NavEventKind::SubmenuOpen,
            Self::SubmenuClose(_) => NavEventKind::SubmenuClose,
        }
    }
}

/// Event kinds subscribers filter on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavEventKind {
    /// See [`NavEvent::Create`].
    Create,
    /// See [`NavEvent::Open`].
    Open,
    /// See [`NavEvent::Close`].
    Close,
    /// See [`NavEvent::SubmenuOpen`].
    SubmenuOpen,
    /// See [`NavEvent::SubmenuClose`].
    SubmenuClose,
}

/// Handle returned by [`Emitter::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u32);

type Handler = Box<dyn FnMut(&NavEvent)>;

/// Delivers [`NavEvent`]s to subscribers, synchronously and in
/// subscription order.
#[derive(Default)]
pub struct Emitter {
    handlers: Vec<(Subscription, NavEventKind, Handler)>,
    next: u32,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("subscribers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

impl Emitter {
    /// An emitter with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `handler` for every event of `kind`.
    pub fn subscribe(
        &mut self,
        kind: NavEventKind,
        handler: impl FnMut(&NavEvent) + 'static,
    ) -> Subscription {
        let sub = Subscription(self.next);
        self.next = self.next.wrapping_add(1);
        self.handlers.push((sub, kind, Box::new(handler)));
        sub
    }

    /// Builder form of [`Emitter::subscribe`] for wiring hooks before
    /// construction.
    #[must_use]
    pub fn on(mut self, kind: NavEventKind, handler: impl FnMut(&NavEvent) + 'static) -> Self {
        self.subscribe(kind, handler);
        self
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(s, _, _)| *s != sub);
        self.handlers.len() != before
    }

    /// Number of live subscribers across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver `event` to every subscriber of its kind.
    pub fn emit(&mut self, event: &NavEvent) {
        let kind = event.kind();
        for (_, k, handler) in &mut self.handlers {
            if *k == kind {
                handler(event);
            }
        }
    }
}
