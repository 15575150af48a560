// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation widget: binding, listener bookkeeping and the interaction
//! state machine.
//!
//! ## State
//!
//! The root menu and every submenu are either closed (initial) or open. Open
//! state lives in the document: the open class plus `aria-hidden`. The
//! widget itself only holds fixed bindings (menu, toggle, submenu registry)
//! and the listener handles it must release on dispose.
//!
//! ## Transitions
//!
//! | Input | Guard | Effect |
//! |---|---|---|
//! | toggle click | | flip the root menu; focus its first link when opening |
//! | anchor click | not (hover and large) | open a hidden submenu, close a visible one |
//! | anchor focus | hover and large | close open siblings, open this submenu |
//! | Escape keyup | a submenu is open | close all; in click mode refocus the first closed anchor |
//! | document click | a submenu is open | close all |
//! | media change | | re-apply viewport ARIA |
//!
//! Closing a submenu closes its open descendants first (depth-first), then
//! returns focus to its anchor on small screens.

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;
use ui_events::keyboard::{Key, NamedKey};

use crate::config::{Action, NavConfig};
use crate::decorate;
use crate::document::{Document, EventKind, ListenerId, ListenerTarget};
use crate::error::NavError;
use crate::events::{Emitter, NavEvent};
use crate::input::{NavInput, Response};
use crate::markup::{aria_bool, attr, class, tag};
use crate::responsive;
use crate::submenu::{SubmenuIndex, SubmenuTree};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Bound<N> {
    Element(N),
    Document,
    Media,
}

#[derive(Copy, Clone, Debug)]
struct Binding<N> {
    id: ListenerId,
    target: Bound<N>,
    kind: EventKind,
}

/// An accessible, responsive dropdown navigation bound to one menu.
///
/// Create it with [`Navigation::create`], forward host input through
/// [`Navigation::handle`], and release its listeners with
/// [`Navigation::dispose`].
///
/// ```rust
/// use understory_nav::memory::MemoryDocument;
/// use understory_nav::{Document, Emitter, NavConfig, NavInput, Navigation};
///
/// let mut doc = MemoryDocument::with_viewport_width(375.0);
/// let body = doc.body();
/// let toggle = doc.create_element(body, "a");
/// doc.set_attribute(toggle, "href", "#primary-nav");
/// doc.set_attribute(toggle, "data-responsive-nav-control", "primary-nav");
/// let nav = doc.create_element(body, "nav");
/// let menu = doc.create_element(nav, "ul");
/// doc.set_attribute(menu, "id", "primary-nav");
/// let item = doc.create_element(menu, "li");
/// let link = doc.create_element(item, "a");
///
/// let mut widget =
///     Navigation::create(&mut doc, "#primary-nav", NavConfig::default(), Emitter::new())
///         .unwrap();
/// assert_eq!(doc.attribute(menu, "aria-hidden"), Some("true"));
///
/// let response = widget.handle(&mut doc, NavInput::Click(toggle));
/// assert!(response.default_prevented);
/// assert_eq!(doc.attribute(menu, "aria-hidden"), Some("false"));
/// assert_eq!(doc.focused(), Some(link));
///
/// widget.dispose(&mut doc);
/// assert_eq!(doc.listener_count(), 0);
/// ```
#[derive(Debug)]
pub struct Navigation<N: Copy + Eq + Hash> {
    config: NavConfig,
    menu: N,
    toggle: N,
    submenus: SubmenuTree<N>,
    events: Emitter,
    bindings: Vec<Binding<N>>,
    disposed: bool,
}

impl<N> Navigation<N>
where
    N: Copy + Eq + Hash + core::fmt::Debug,
{
    /// Bind to the menu matched by `selector`, decorate it and start
    /// listening.
    ///
    /// The toggle is the element whose `data-responsive-nav-control` equals
    /// the menu's `id`; its `href` should be `#<id>` so the link still works
    /// without scripting (a mismatch is logged as a warning).
    ///
    /// Subscribers already registered on `events` receive
    /// [`NavEvent::Create`] before this returns.
    ///
    /// # Errors
    ///
    /// See [`NavError`]. On error nothing was written to `doc` and no
    /// listener was registered.
    pub fn create<D>(
        doc: &mut D,
        selector: &str,
        config: NavConfig,
        events: Emitter,
    ) -> Result<Self, NavError>
    where
        D: Document<Node = N>,
    {
        let (menu, toggle, menu_id) = bind(&*doc, selector)?;

        let href_target = doc
            .attribute(toggle, attr::HREF)
            .unwrap_or_default()
            .replacen('#', "", 1);
        if href_target != menu_id {
            tracing::warn!(
                href = %href_target,
                menu_id = %menu_id,
                "the menu toggle href and menu ID are not equal"
            );
        }

        decorate::mark_scripted(doc);
        decorate::decorate_menu(doc, menu, toggle, &href_target, config.action);
        let large = doc.media_matches(&config.breakpoint);
        responsive::apply_menu_a11y(doc, menu, toggle, large);
        let submenus = decorate::decorate_submenus(doc, menu);
        responsive::apply_submenu_a11y(doc, &submenus);

        let mut nav = Self {
            config,
            menu,
            toggle,
            submenus,
            events,
            bindings: Vec::new(),
            disposed: false,
        };
        nav.bind_listeners(doc);

        tracing::debug!(
            menu_id = %menu_id,
            action = %nav.config.action,
            breakpoint = %nav.config.breakpoint,
            large,
            submenus = nav.submenus.len(),
            "navigation created"
        );
        nav.events.emit(&NavEvent::Create);
        Ok(nav)
    }

    fn bind_listeners<D: Document<Node = N>>(&mut self, doc: &mut D) {
        self.listen(doc, Bound::Media, EventKind::MediaChange);
        self.listen(doc, Bound::Element(self.toggle), EventKind::Click);

        let anchors: Vec<N> = self.submenus.iter().filter_map(|(_, s)| s.anchor).collect();
        for anchor in anchors {
            if self.config.action == Action::Hover {
                self.listen(doc, Bound::Element(anchor), EventKind::Focus);
            }
            self.listen(doc, Bound::Element(anchor), EventKind::Click);
        }

        self.listen(doc, Bound::Document, EventKind::Click);
        self.listen(doc, Bound::Document, EventKind::KeyUp);
    }

    fn listen<D: Document<Node = N>>(&mut self, doc: &mut D, target: Bound<N>, kind: EventKind) {
        let id = match target {
            Bound::Element(n) => doc.add_listener(ListenerTarget::Element(n), kind),
            Bound::Document => doc.add_listener(ListenerTarget::Document, kind),
            Bound::Media => {
                doc.add_listener(ListenerTarget::MediaQuery(&self.config.breakpoint), kind)
            }
        };
        self.bindings.push(Binding { id, target, kind });
    }

    fn is_bound(&self, target: Bound<N>, kind: EventKind) -> bool {
        self.bindings
            .iter()
            .any(|b| b.target == target && b.kind == kind)
    }

    /// Release every listener registered with the document.
    ///
    /// Decoration stays in place. After disposal [`Navigation::handle`]
    /// ignores all input. Calling this more than once is a no-op.
    pub fn dispose<D: Document<Node = N>>(&mut self, doc: &mut D) {
        if self.disposed {
            return;
        }
        let released = self.bindings.len();
        for binding in self.bindings.drain(..) {
            doc.remove_listener(binding.id);
        }
        self.disposed = true;
        tracing::debug!(released, "navigation disposed");
    }

    /// Whether [`Navigation::dispose`] has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The resolved configuration.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// The root menu element.
    #[must_use]
    pub fn menu(&self) -> N {
        self.menu
    }

    /// The toggle control.
    #[must_use]
    pub fn toggle(&self) -> N {
        self.toggle
    }

    /// The submenu registry.
    #[must_use]
    pub fn submenus(&self) -> &SubmenuTree<N> {
        &self.submenus
    }

    /// Lifecycle event subscribers; add or remove them at any time.
    pub fn events_mut(&mut self) -> &mut Emitter {
        &mut self.events
    }

    /// Whether the viewport currently matches the breakpoint.
    #[must_use]
    pub fn is_large<D: Document<Node = N>>(&self, doc: &D) -> bool {
        doc.media_matches(&self.config.breakpoint)
    }

    /// Whether `index` carries the open class.
    #[must_use]
    pub fn is_submenu_open<D: Document<Node = N>>(&self, doc: &D, index: SubmenuIndex) -> bool {
        self.submenus
            .get(index)
            .is_some_and(|s| doc.has_class(s.list, class::SUBMENU_OPEN))
    }

    /// Submenus currently carrying the open class, in document order.
    #[must_use]
    pub fn open_submenus<D: Document<Node = N>>(&self, doc: &D) -> Vec<SubmenuIndex> {
        self.submenus
            .indices()
            .filter(|&i| self.is_submenu_open(&*doc, i))
            .collect()
    }

    /// Apply one input and report what happened to the native event.
    pub fn handle<D: Document<Node = N>>(&mut self, doc: &mut D, input: NavInput<N>) -> Response {
        match input {
            NavInput::Click(target) => {
                let mut response = Response::default();
                if self.is_bound(Bound::Element(target), EventKind::Click) {
                    if target == self.toggle {
                        response = self.toggle_click(doc);
                    } else if let Some(index) = self.submenus.by_anchor(target) {
                        response = self.anchor_click(doc, index);
                    }
                }
                if !response.propagation_stopped
                    && self.is_bound(Bound::Document, EventKind::Click)
                {
                    self.document_click(doc);
                }
                response
            }
            NavInput::DocumentClick => {
                if self.is_bound(Bound::Document, EventKind::Click) {
                    self.document_click(doc);
                }
                Response::default()
            }
            NavInput::Focus(target) => {
                if self.is_bound(Bound::Element(target), EventKind::Focus) {
                    if let Some(index) = self.submenus.by_anchor(target) {
                        self.anchor_focus(doc, index);
                    }
                }
                Response::default()
            }
            NavInput::KeyUp(key) => {
                if self.is_bound(Bound::Document, EventKind::KeyUp) {
                    self.document_keyup(doc, &key);
                }
                Response::default()
            }
            NavInput::MediaChange => {
                if self.is_bound(Bound::Media, EventKind::MediaChange) {
                    self.media_change(doc);
                }
                Response::default()
            }
        }
    }

    /// Re-derive viewport ARIA after a breakpoint crossing.
    fn media_change<D: Document<Node = N>>(&mut self, doc: &mut D) {
        let large = self.is_large(&*doc);
        tracing::debug!(large, "breakpoint crossed");
        responsive::apply_menu_a11y(doc, self.menu, self.toggle, large);
        responsive::apply_submenu_a11y(doc, &self.submenus);
    }

    fn toggle_click<D: Document<Node = N>>(&mut self, doc: &mut D) -> Response {
        let expanded = doc.attribute(self.toggle, attr::ARIA_EXPANDED) == Some("true");

        if expanded {
            doc.remove_class(self.menu, class::MENU_OPEN);
            doc.remove_class(self.toggle, class::TOGGLE_OPEN);
            doc.set_attribute(self.menu, attr::ARIA_HIDDEN, aria_bool(true));
            doc.set_attribute(self.toggle, attr::ARIA_EXPANDED, aria_bool(false));
            tracing::debug!("menu closed");
            self.events.emit(&NavEvent::Close);
        } else {
            doc.add_class(self.menu, class::MENU_OPEN);
            doc.add_class(self.toggle, class::TOGGLE_OPEN);
            doc.set_attribute(self.menu, attr::ARIA_HIDDEN, aria_bool(false));
            doc.set_attribute(self.toggle, attr::ARIA_EXPANDED, aria_bool(true));
            if let Some(&first) = doc.descendants_by_tag(self.menu, tag::ANCHOR).first() {
                doc.focus(first);
            }
            tracing::debug!("menu opened");
            self.events.emit(&NavEvent::Open);
        }
        Response::CONSUMED
    }

    fn anchor_click<D: Document<Node = N>>(&mut self, doc: &mut D, index: SubmenuIndex) -> Response {
        // Focus drives submenus here; let the link behave as a link.
        if self.config.action == Action::Hover && self.is_large(&*doc) {
            return Response::default();
        }
        let Some(list) = self.submenus.get(index).map(|s| s.list) else {
            return Response::default();
        };
        if doc.attribute(list, attr::ARIA_HIDDEN) == Some("true") {
            self.open_submenu(doc, index);
        } else {
            self.close_submenu(doc, index);
        }
        Response::CONSUMED
    }

    fn anchor_focus<D: Document<Node = N>>(&mut self, doc: &mut D, index: SubmenuIndex) {
        if !self.is_large(&*doc) {
            return;
        }
        let level: Vec<SubmenuIndex> = self.submenus.siblings(index).collect();
        for sibling in level {
            if self.is_submenu_open(&*doc, sibling) {
                self.close_submenu(doc, sibling);
            } else {
                self.close_open_descendants(doc, sibling);
            }
        }
        self.open_submenu(doc, index);
    }

    fn document_keyup<D: Document<Node = N>>(&mut self, doc: &mut D, key: &Key) {
        if !matches!(key, Key::Named(NamedKey::Escape)) {
            return;
        }
        let closed = self.close_all(doc);
        let Some(&first) = closed.first() else {
            return;
        };
        if self.config.action == Action::Click {
            if let Some(anchor) = self.submenus.get(first).and_then(|s| s.anchor) {
                doc.focus(anchor);
            }
        }
    }

    fn document_click<D: Document<Node = N>>(&mut self, doc: &mut D) {
        self.close_all(doc);
    }

    /// Close every open submenu; returns those that were open, in document
    /// order.
    fn close_all<D: Document<Node = N>>(&mut self, doc: &mut D) -> Vec<SubmenuIndex> {
        let open = self.open_submenus(&*doc);
        for &index in &open {
            // Nested entries may already be closed by an ancestor.
            if self.is_submenu_open(&*doc, index) {
                self.close_submenu(doc, index);
            }
        }
        open
    }

    fn open_submenu<D: Document<Node = N>>(&mut self, doc: &mut D, index: SubmenuIndex) {
        let Some(list) = self.submenus.get(index).map(|s| s.list) else {
            return;
        };
        doc.set_attribute(list, attr::ARIA_HIDDEN, aria_bool(false));
        doc.add_class(list, class::SUBMENU_OPEN);
        tracing::trace!(?index, "submenu opened");
        self.events.emit(&NavEvent::SubmenuOpen(index));
    }

    fn close_submenu<D: Document<Node = N>>(&mut self, doc: &mut D, index: SubmenuIndex) {
        let Some((list, anchor)) = self.submenus.get(index).map(|s| (s.list, s.anchor)) else {
            return;
        };
        self.close_open_descendants(doc, index);

        doc.set_attribute(list, attr::ARIA_HIDDEN, aria_bool(true));
        doc.remove_class(list, class::SUBMENU_OPEN);

        if !self.is_large(&*doc) {
            if let Some(anchor) = anchor {
                doc.focus(anchor);
            }
        }
        tracing::trace!(?index, "submenu closed");
        self.events.emit(&NavEvent::SubmenuClose(index));
    }

    fn close_open_descendants<D: Document<Node = N>>(&mut self, doc: &mut D, index: SubmenuIndex) {
        let children = match self.submenus.get(index) {
            Some(s) => s.children.clone(),
            None => return,
        };
        for child in children {
            if self.is_submenu_open(&*doc, child) {
                self.close_submenu(doc, child);
            } else {
                self.close_open_descendants(doc, child);
            }
        }
    }
}

/// Locate the menu and its toggle and validate the menu identifier.
fn bind<D: Document>(doc: &D, selector: &str) -> Result<(D::Node, D::Node, String), NavError> {
    if selector.trim().is_empty() {
        let err = NavError::MissingTarget;
        tracing::error!("{err}");
        return Err(err);
    }

    let Some(menu) = doc.query_selector(selector) else {
        let err = NavError::TargetNotFound {
            selector: selector.into(),
        };
        tracing::error!("{err}");
        return Err(err);
    };

    let menu_id = String::from(doc.attribute(menu, attr::ID).unwrap_or_default());
    let Some(toggle) = doc.find_by_attribute(attr::NAV_CONTROL, &menu_id) else {
        let err = NavError::ToggleNotFound { menu_id };
        tracing::error!("{err}");
        return Err(err);
    };

    if menu_id.trim().is_empty() {
        let err = NavError::MissingMenuId {
            selector: selector.into(),
        };
        tracing::error!("{err}");
        return Err(err);
    }

    Ok((menu, toggle, menu_id))
}
