// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document adapter: everything the widget needs from its host.
//!
//! The widget never touches a rendering engine directly. Instead it reads and
//! writes through a [`Document`] implementation supplied by the host: a thin
//! wrapper over a browser DOM, a retained UI tree, or the bundled
//! [`MemoryDocument`](crate::memory::MemoryDocument).
//!
//! Event delivery is the host's job. The widget registers interest with
//! [`Document::add_listener`] and the host forwards matching input to
//! [`Navigation::handle`](crate::Navigation::handle). Listener handles are
//! returned to the host with [`Document::remove_listener`] on dispose.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

/// Opaque handle to a listener registered with a [`Document`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// The kinds of event the widget subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer or keyboard activation.
    Click,
    /// An element received focus.
    Focus,
    /// A key was released.
    KeyUp,
    /// A media query changed its match state.
    MediaChange,
}

/// Where a listener is attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget<'a, N> {
    /// A single element.
    Element(N),
    /// The document as a whole (receives bubbled events).
    Document,
    /// A media query list for the given query.
    MediaQuery(&'a str),
}

/// Host document capabilities used by the navigation widget.
///
/// Nodes are small copyable handles. Only element nodes are visible through
/// this trait; [`Document::children`] and [`Document::previous_element_sibling`]
/// skip text and comments.
pub trait Document {
    /// Handle to an element.
    type Node: Copy + Eq + Hash + Debug;

    /// First element in document order matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;

    /// The root element (`<html>`), if any.
    fn document_element(&self) -> Option<Self::Node>;

    /// First element in document order whose attribute `name` equals `value`.
    fn find_by_attribute(&self, name: &str, value: &str) -> Option<Self::Node>;

    /// Lowercase element name.
    fn tag_name(&self, node: Self::Node) -> &str;

    /// Parent element.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Child elements in document order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// The element immediately preceding `node` among its parent's children.
    fn previous_element_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Attribute value.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// Set (or replace) an attribute.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// Whether the element's class list contains `class`.
    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    /// Add `class` to the class list; no-op if present.
    fn add_class(&mut self, node: Self::Node, class: &str);

    /// Remove `class` from the class list; no-op if absent.
    fn remove_class(&mut self, node: Self::Node, class: &str);

    /// Move keyboard focus to `node`.
    fn focus(&mut self, node: Self::Node);

    /// Current match state of a media query.
    fn media_matches(&self, query: &str) -> bool;

    /// Register interest in `kind` events on `target`.
    fn add_listener(&mut self, target: ListenerTarget<'_, Self::Node>, kind: EventKind)
    -> ListenerId;

    /// Release a listener returned by [`Document::add_listener`].
    fn remove_listener(&mut self, id: ListenerId);

    /// Nearest inclusive ancestor with the given element name.
    fn closest(&self, node: Self::Node, tag: &str) -> Option<Self::Node> {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if self.tag_name(n) == tag {
                return Some(n);
            }
            cur = self.parent(n);
        }
        None
    }

    /// All descendants of `node` (exclusive) in document order.
    fn descendants(&self, node: Self::Node) -> Vec<Self::Node> {
        let mut out = Vec::new();
        // Reverse push so the stack pops in document order.
        let mut stack: Vec<Self::Node> = self.children(node).into_iter().rev().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).into_iter().rev());
        }
        out
    }

    /// Descendants of `node` with the given element name, in document order.
    fn descendants_by_tag(&self, node: Self::Node, tag: &str) -> Vec<Self::Node> {
        self.descendants(node)
            .into_iter()
            .filter(|&n| self.tag_name(n) == tag)
            .collect()
    }
}
