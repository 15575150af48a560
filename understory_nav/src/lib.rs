// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Nav: accessible, responsive dropdown navigation.
//!
//! This crate layers ARIA semantics and keyboard/pointer interaction onto an
//! existing list-based menu. It does not render anything and does not assume
//! a particular UI framework. The host supplies a [`Document`] adapter for
//! reading and writing elements, and forwards input as [`NavInput`] values;
//! the widget answers with a [`Response`] describing what to do with the
//! native event.
//!
//! ## Markup
//!
//! The widget expects a menu list with a non-empty `id`, and a toggle control
//! pointing at it:
//!
//! ```html
//! <a href="#primary-nav" data-responsive-nav-control="primary-nav">Menu</a>
//! <nav>
//!   <ul id="primary-nav">
//!     <li><a href="/about">About</a>
//!       <ul>
//!         <li><a href="/team">Team</a></li>
//!       </ul>
//!     </li>
//!   </ul>
//! </nav>
//! ```
//!
//! Every nested list is a submenu, and its preceding sibling is the anchor
//! that opens it. Decoration adds scoped class names, generated submenu ids
//! (`tenUp-submenu-<index>`), `aria-controls`, `aria-haspopup` and the
//! viewport-dependent `aria-hidden` / `aria-expanded` state.
//!
//! ## Small and large screens
//!
//! A breakpoint media query (default `(min-width: 48em)`) splits behavior:
//!
//! - Large: the menu is always visible and the toggle is hidden from
//!   assistive technology. In [`Action::Hover`] mode submenus open when their
//!   anchor receives focus.
//! - Small: the toggle opens and closes the menu; submenus open on click, and
//!   closing one returns focus to its anchor.
//!
//! Escape and clicks outside the menu close any open submenus in either case.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_nav::memory::MemoryDocument;
//! use understory_nav::{Action, Document, Emitter, NavConfig, NavInput, Navigation};
//!
//! let mut doc = MemoryDocument::with_viewport_width(1024.0);
//! let body = doc.body();
//! let toggle = doc.create_element(body, "a");
//! doc.set_attribute(toggle, "href", "#primary-nav");
//! doc.set_attribute(toggle, "data-responsive-nav-control", "primary-nav");
//! let nav = doc.create_element(body, "nav");
//! let menu = doc.create_element(nav, "ul");
//! doc.set_attribute(menu, "id", "primary-nav");
//! let item = doc.create_element(menu, "li");
//! let about = doc.create_element(item, "a");
//! let submenu = doc.create_element(item, "ul");
//!
//! let config = NavConfig::default().with_action(Action::Click);
//! let mut widget = Navigation::create(&mut doc, "#primary-nav", config, Emitter::new()).unwrap();
//!
//! assert_eq!(doc.attribute(submenu, "id"), Some("tenUp-submenu-0"));
//! assert_eq!(doc.attribute(about, "aria-controls"), Some("tenUp-submenu-0"));
//! assert_eq!(doc.attribute(submenu, "aria-hidden"), Some("true"));
//!
//! widget.handle(&mut doc, NavInput::Click(about));
//! assert_eq!(doc.attribute(submenu, "aria-hidden"), Some("false"));
//! ```
//!
//! ## Lifecycle events
//!
//! [`Emitter`] delivers [`NavEvent`]s to any number of subscribers. Pass one
//! to [`Navigation::create`] to observe [`NavEvent::Create`]; add more later
//! through [`Navigation::events_mut`].
//!
//! ## Logging
//!
//! Construction failures are logged at `error` level and a misconfigured
//! toggle `href` at `warn`, through `tracing`. Install a subscriber in the
//! host to see them.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `serde`: `Serialize`/`Deserialize` for [`NavConfig`] and [`Action`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod decorate;
mod document;
mod error;
mod events;
mod input;
pub mod markup;
pub mod media;
pub mod memory;
mod nav;
mod responsive;
mod submenu;

pub use config::{Action, DEFAULT_BREAKPOINT, NavConfig};
pub use document::{Document, EventKind, ListenerId, ListenerTarget};
pub use error::NavError;
pub use events::{Emitter, NavEvent, NavEventKind, Subscription};
pub use input::{NavInput, Response};
pub use nav::Navigation;
pub use submenu::{Submenu, SubmenuIndex, SubmenuTree};

/// Re-exported so hosts can build [`NavInput::KeyUp`] without depending on
/// `ui-events` directly.
pub use ui_events::keyboard::{Key, NamedKey};
