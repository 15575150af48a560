// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The submenu registry: an owned, index-addressed tree of nested lists.
//!
//! Built once at decoration time from the menu's descendant lists in document
//! order. Recursive operations (closing descendants, finding siblings) walk
//! this structure rather than re-querying the document, so traversal order is
//! fixed and independent of the current class state.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::markup::SUBMENU_ID_PREFIX;

/// Position of a submenu in document order; also the suffix of its generated
/// identifier (`tenUp-submenu-<index>`).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmenuIndex(pub(crate) usize);

impl SubmenuIndex {
    /// The submenu at document-order `position`.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// The document-order position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Debug for SubmenuIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubmenuIndex({})", self.0)
    }
}

/// One nested list and its triggering anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submenu<N> {
    /// The `ul` element.
    pub list: N,
    /// Preceding element sibling of the list. `None` only for malformed markup.
    pub anchor: Option<N>,
    /// Generated identifier written to the list's `id`.
    pub id: String,
    /// Nearest enclosing submenu, `None` for top-level submenus.
    pub parent: Option<SubmenuIndex>,
    /// Directly nested submenus, in document order.
    pub children: SmallVec<[SubmenuIndex; 4]>,
}

/// All submenus of one menu.
#[derive(Clone, Debug)]
pub struct SubmenuTree<N: Copy + Eq + Hash> {
    entries: Vec<Submenu<N>>,
    by_list: HashMap<N, SubmenuIndex>,
    by_anchor: HashMap<N, SubmenuIndex>,
}

impl<N: Copy + Eq + Hash> Default for SubmenuTree<N> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_list: HashMap::new(),
            by_anchor: HashMap::new(),
        }
    }
}

impl<N: Copy + Eq + Hash> SubmenuTree<N> {
    /// Build from `(list, anchor)` pairs in document order.
    ///
    /// `parent_of` returns the parent element of a node; it is used to find
    /// the nearest enclosing list that is itself a registered submenu.
    pub fn build(
        lists: impl IntoIterator<Item = (N, Option<N>)>,
        parent_of: impl Fn(N) -> Option<N>,
    ) -> Self {
        let mut tree = Self::default();
        for (i, (list, anchor)) in lists.into_iter().enumerate() {
            let index = SubmenuIndex(i);
            // Ancestors precede descendants in document order, so the
            // enclosing submenu is already registered.
            let mut cur = parent_of(list);
            let mut parent = None;
            while let Some(node) = cur {
                if let Some(&p) = tree.by_list.get(&node) {
                    parent = Some(p);
                    break;
                }
                cur = parent_of(node);
            }
            if let Some(p) = parent {
                tree.entries[p.0].children.push(index);
            }
            tree.by_list.insert(list, index);
            if let Some(a) = anchor {
                tree.by_anchor.insert(a, index);
            }
            tree.entries.push(Submenu {
                list,
                anchor,
                id: alloc::format!("{SUBMENU_ID_PREFIX}{i}"),
                parent,
                children: SmallVec::new(),
            });
        }
        tree
    }

    /// Number of submenus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the menu has no submenus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, index: SubmenuIndex) -> Option<&Submenu<N>> {
        self.entries.get(index.0)
    }

    /// All indices in document order.
    pub fn indices(&self) -> impl Iterator<Item = SubmenuIndex> + '_ {
        (0..self.entries.len()).map(SubmenuIndex)
    }

    /// All entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (SubmenuIndex, &Submenu<N>)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, s)| (SubmenuIndex(i), s))
    }

    /// The submenu triggered by `anchor`.
    #[must_use]
    pub fn by_anchor(&self, anchor: N) -> Option<SubmenuIndex> {
        self.by_anchor.get(&anchor).copied()
    }

    /// The submenu whose list element is `list`.
    #[must_use]
    pub fn by_list(&self, list: N) -> Option<SubmenuIndex> {
        self.by_list.get(&list).copied()
    }

    /// Submenus sharing `index`'s parent (including `index` itself), in
    /// document order.
    pub fn siblings(&self, index: SubmenuIndex) -> impl Iterator<Item = SubmenuIndex> + '_ {
        let parent = self.entries.get(index.0).and_then(|s| s.parent);
        self.iter()
            .filter(move |(_, s)| s.parent == parent)
            .map(|(i, _)| i)
    }

    /// Descendants of `index` (exclusive) in depth-first pre-order.
    #[must_use]
    pub fn descendants(&self, index: SubmenuIndex) -> Vec<SubmenuIndex> {
        let mut out = Vec::new();
        let mut stack: Vec<SubmenuIndex> = self
            .get(index)
            .map(|s| s.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(i) = stack.pop() {
            out.push(i);
            stack.extend(self.entries[i.0].children.iter().rev().copied());
        }
        out
    }
}
