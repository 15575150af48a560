// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An owned, in-memory [`Document`] implementation.
//!
//! [`MemoryDocument`] is a minimal element tree with attributes, a class
//! list, keyboard focus, a viewport width and a listener registry. It is
//! enough to drive [`Navigation`](crate::Navigation) headlessly: in tests,
//! in server-side pre-rendering of the decorated markup, or as the backing
//! store of a non-browser UI.
//!
//! ```rust
//! use understory_nav::memory::MemoryDocument;
//! use understory_nav::Document;
//!
//! let mut doc = MemoryDocument::new();
//! let nav = doc.create_element(doc.body(), "nav");
//! let ul = doc.create_element(nav, "ul");
//! doc.set_attribute(ul, "id", "primary-nav");
//!
//! assert_eq!(doc.query_selector("#primary-nav"), Some(ul));
//! assert_eq!(doc.closest(ul, "nav"), Some(nav));
//! ```

mod selector;

pub use selector::SelectorError;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::document::{Document, EventKind, ListenerId, ListenerTarget};
use crate::media::MediaQuery;
use selector::Compound;

/// Identifier for an element in a [`MemoryDocument`].
///
/// Elements are never removed, so identifiers stay valid for the lifetime of
/// the document that created them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

impl ElementId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementId").field(&self.0).finish()
    }
}

#[derive(Clone, Debug)]
struct Element {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// Insertion-ordered; `class` lives here too, space separated.
    attributes: SmallVec<[(String, String); 4]>,
}

impl Element {
    fn new(tag: &str, parent: Option<ElementId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            parent,
            children: Vec::new(),
            attributes: SmallVec::new(),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name.to_string(), value));
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum OwnedTarget {
    Element(ElementId),
    Document,
    MediaQuery { query: String, matches: bool },
}

#[derive(Clone, Debug)]
struct Listener {
    target: OwnedTarget,
    kind: EventKind,
}

/// Width used by [`MemoryDocument::new`]; a typical desktop viewport.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

/// An in-memory element tree implementing [`Document`].
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    focused: Option<ElementId>,
    viewport_width: f64,
    listeners: HashMap<ListenerId, Listener>,
    next_listener: u64,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document holding `<html>` and an empty `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let mut html = Element::new("html", None);
        html.children.push(ElementId(1));
        let body = Element::new("body", Some(ElementId(0)));
        Self {
            elements: alloc::vec![html, body],
            focused: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            listeners: HashMap::new(),
            next_listener: 1,
        }
    }

    /// Same as [`MemoryDocument::new`] with the given viewport width.
    #[must_use]
    pub fn with_viewport_width(width_px: f64) -> Self {
        let mut doc = Self::new();
        doc.viewport_width = width_px;
        doc
    }

    /// The `<html>` element.
    #[must_use]
    pub fn html(&self) -> ElementId {
        ElementId(0)
    }

    /// The `<body>` element.
    #[must_use]
    pub fn body(&self) -> ElementId {
        ElementId(1)
    }

    /// Append a new element as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn create_element(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let id = ElementId(u32::try_from(self.elements.len()).expect("element count fits in u32"));
        self.elements.push(Element::new(tag, Some(parent)));
        self.elements[parent.idx()].children.push(id);
        id
    }

    /// The element that currently has keyboard focus.
    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Current viewport width in CSS pixels.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Resize the viewport.
    ///
    /// Returns `true` if any subscribed media query changed its match state;
    /// the host should then forward a
    /// [`NavInput::MediaChange`](crate::NavInput::MediaChange).
    pub fn set_viewport_width(&mut self, width_px: f64) -> bool {
        self.viewport_width = width_px;
        let mut changed = false;
        for listener in self.listeners.values_mut() {
            if let OwnedTarget::MediaQuery { query, matches } = &mut listener.target {
                let now = evaluate(query, width_px);
                if now != *matches {
                    *matches = now;
                    changed = true;
                }
            }
        }
        changed
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether a listener for `kind` is registered on `target`.
    #[must_use]
    pub fn has_listener(&self, target: ListenerTarget<'_, ElementId>, kind: EventKind) -> bool {
        self.listeners.values().any(|l| {
            l.kind == kind
                && match (&l.target, target) {
                    (OwnedTarget::Element(a), ListenerTarget::Element(b)) => *a == b,
                    (OwnedTarget::Document, ListenerTarget::Document) => true,
                    (OwnedTarget::MediaQuery { query, .. }, ListenerTarget::MediaQuery(q)) => {
                        query == q
                    }
                    _ => false,
                }
        })
    }

    /// Whether `node` carries `aria-hidden="true"`.
    #[must_use]
    pub fn is_aria_hidden(&self, node: ElementId) -> bool {
        self.attribute(node, crate::markup::attr::ARIA_HIDDEN) == Some("true")
    }

    fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.idx()]
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.idx()]
    }

    /// Every element in document order, starting at `<html>`.
    fn document_order(&self) -> Vec<ElementId> {
        let mut out = alloc::vec![self.html()];
        out.extend(self.descendants(self.html()));
        out
    }

    fn matches(&self, id: ElementId, sel: &Compound) -> bool {
        let el = self.element(id);
        sel.tag.as_deref().is_none_or(|t| el.tag == t)
            && sel
                .id
                .as_deref()
                .is_none_or(|want| el.attribute("id") == Some(want))
            && sel.classes.iter().all(|c| el.has_class(c))
            && sel.attrs.iter().all(|a| match (&a.value, el.attribute(&a.name)) {
                (None, found) => found.is_some(),
                (Some(want), Some(found)) => want == found,
                (Some(_), None) => false,
            })
    }
}

fn evaluate(query: &str, width_px: f64) -> bool {
    match MediaQuery::parse(query) {
        Ok(q) => q.matches(width_px),
        Err(err) => {
            tracing::debug!(query, %err, "unsupported media query never matches");
            false
        }
    }
}

impl Document for MemoryDocument {
    type Node = ElementId;

    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        let sel = match Compound::parse(selector) {
            Ok(sel) => sel,
            Err(err) => {
                tracing::debug!(selector, %err, "selector not supported");
                return None;
            }
        };
        self.document_order()
            .into_iter()
            .find(|&id| self.matches(id, &sel))
    }

    fn document_element(&self) -> Option<ElementId> {
        Some(self.html())
    }

    fn find_by_attribute(&self, name: &str, value: &str) -> Option<ElementId> {
        self.document_order()
            .into_iter()
            .find(|&id| self.element(id).attribute(name) == Some(value))
    }

    fn tag_name(&self, node: ElementId) -> &str {
        &self.element(node).tag
    }

    fn parent(&self, node: ElementId) -> Option<ElementId> {
        self.element(node).parent
    }

    fn children(&self, node: ElementId) -> Vec<ElementId> {
        self.element(node).children.clone()
    }

    fn previous_element_sibling(&self, node: ElementId) -> Option<ElementId> {
        let parent = self.element(node).parent?;
        let siblings = &self.element(parent).children;
        let pos = siblings.iter().position(|&s| s == node)?;
        pos.checked_sub(1).map(|prev| siblings[prev])
    }

    fn attribute(&self, node: ElementId, name: &str) -> Option<&str> {
        self.element(node).attribute(name)
    }

    fn set_attribute(&mut self, node: ElementId, name: &str, value: &str) {
        self.element_mut(node).set_attribute(name, value.to_string());
    }

    fn has_class(&self, node: ElementId, class: &str) -> bool {
        self.element(node).has_class(class)
    }

    fn add_class(&mut self, node: ElementId, class: &str) {
        let el = self.element_mut(node);
        if el.has_class(class) {
            return;
        }
        let list = match el.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                let mut list = existing.trim().to_string();
                list.push(' ');
                list.push_str(class);
                list
            }
            _ => class.to_string(),
        };
        el.set_attribute("class", list);
    }

    fn remove_class(&mut self, node: ElementId, class: &str) {
        let el = self.element_mut(node);
        if !el.has_class(class) {
            return;
        }
        let list: Vec<&str> = el
            .attribute("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
            .filter(|&c| c != class)
            .collect();
        let list = list.join(" ");
        el.set_attribute("class", list);
    }

    fn focus(&mut self, node: ElementId) {
        self.focused = Some(node);
    }

    fn media_matches(&self, query: &str) -> bool {
        evaluate(query, self.viewport_width)
    }

    fn add_listener(
        &mut self,
        target: ListenerTarget<'_, ElementId>,
        kind: EventKind,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        let target = match target {
            ListenerTarget::Element(node) => OwnedTarget::Element(node),
            ListenerTarget::Document => OwnedTarget::Document,
            ListenerTarget::MediaQuery(query) => OwnedTarget::MediaQuery {
                query: query.to_string(),
                matches: evaluate(query, self.viewport_width),
            },
        };
        self.listeners.insert(id, Listener { target, kind });
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_doc() -> (MemoryDocument, ElementId, [ElementId; 3]) {
        let mut doc = MemoryDocument::new();
        let ul = doc.create_element(doc.body(), "ul");
        let a = doc.create_element(ul, "li");
        let b = doc.create_element(ul, "LI");
        let c = doc.create_element(b, "a");
        (doc, ul, [a, b, c])
    }

    #[test]
    fn siblings_and_document_order() {
        let (doc, ul, [a, b, c]) = list_doc();
        assert_eq!(doc.previous_element_sibling(b), Some(a));
        assert_eq!(doc.previous_element_sibling(a), None);
        assert_eq!(doc.descendants(ul), [a, b, c]);
        assert_eq!(doc.descendants_by_tag(doc.html(), "li"), [a, b]);
        assert_eq!(doc.tag_name(b), "li");
    }

    #[test]
    fn class_list_edits_are_idempotent() {
        let (mut doc, ul, _) = list_doc();
        doc.add_class(ul, "menu");
        doc.add_class(ul, "menu");
        doc.add_class(ul, "main");
        assert_eq!(doc.attribute(ul, "class"), Some("menu main"));
        doc.remove_class(ul, "menu");
        doc.remove_class(ul, "absent");
        assert_eq!(doc.attribute(ul, "class"), Some("main"));
        assert!(doc.has_class(ul, "main"));
        assert!(!doc.has_class(ul, "menu"));
    }

    #[test]
    fn query_selector_finds_first_in_document_order() {
        let (mut doc, ul, [a, b, _]) = list_doc();
        doc.set_attribute(ul, "id", "nav");
        doc.add_class(a, "item");
        doc.add_class(b, "item");
        doc.set_attribute(b, "data-x", "1");
        assert_eq!(doc.query_selector("#nav"), Some(ul));
        assert_eq!(doc.query_selector("li.item"), Some(a));
        assert_eq!(doc.query_selector("[data-x=\"1\"]"), Some(b));
        assert_eq!(doc.query_selector("html"), Some(doc.html()));
        assert_eq!(doc.query_selector("#missing"), None);
        assert_eq!(doc.query_selector("ul li"), None);
        assert_eq!(doc.find_by_attribute("data-x", "1"), Some(b));
    }

    #[test]
    fn viewport_changes_report_media_crossings_only() {
        let mut doc = MemoryDocument::with_viewport_width(1024.0);
        let id = doc.add_listener(
            ListenerTarget::MediaQuery("(min-width: 48em)"),
            EventKind::MediaChange,
        );
        assert!(doc.media_matches("(min-width: 48em)"));
        assert!(!doc.set_viewport_width(900.0));
        assert!(doc.set_viewport_width(375.0));
        assert!(!doc.set_viewport_width(320.0));
        assert!(!doc.media_matches("(min-width: 48em)"));

        doc.remove_listener(id);
        assert_eq!(doc.listener_count(), 0);
        assert!(!doc.set_viewport_width(1024.0));
    }

    #[test]
    fn listener_registry_matches_targets() {
        let (mut doc, ul, _) = list_doc();
        doc.add_listener(ListenerTarget::Element(ul), EventKind::Click);
        doc.add_listener(ListenerTarget::Document, EventKind::KeyUp);
        assert!(doc.has_listener(ListenerTarget::Element(ul), EventKind::Click));
        assert!(!doc.has_listener(ListenerTarget::Element(ul), EventKind::Focus));
        assert!(doc.has_listener(ListenerTarget::Document, EventKind::KeyUp));
        assert_eq!(doc.listener_count(), 2);
    }
}
