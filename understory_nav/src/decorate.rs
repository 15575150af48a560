// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time decoration: classes and ARIA relations that make the raw markup
//! an accessible, styleable menu.

use crate::config::Action;
use crate::document::Document;
use crate::markup::{SUBMENU_LABEL, aria_bool, attr, class, tag};
use crate::submenu::SubmenuTree;

/// Swap the document element's `no-js` class for `js`, so host styles stop
/// relying on `:target` fallbacks.
pub(crate) fn mark_scripted<D: Document>(doc: &mut D) {
    if let Some(html) = doc.document_element() {
        doc.remove_class(html, class::NO_JS);
        doc.add_class(html, class::JS);
    }
}

/// Classes on the landmark, menu, toggle and items, plus the toggle's
/// `aria-controls`.
pub(crate) fn decorate_menu<D: Document>(
    doc: &mut D,
    menu: D::Node,
    toggle: D::Node,
    href_target: &str,
    action: Action,
) {
    match doc.closest(menu, tag::NAV) {
        Some(nav) => doc.add_class(nav, class::NAVIGATION),
        None => tracing::debug!(?menu, "menu has no enclosing nav landmark"),
    }
    doc.add_class(menu, class::MENU);
    doc.add_class(menu, class::MENU_MAIN);
    doc.add_class(toggle, class::TOGGLE);

    doc.add_class(
        menu,
        match action {
            Action::Click => class::MENU_CLICK,
            Action::Hover => class::MENU_HOVER,
        },
    );

    for item in doc.descendants_by_tag(menu, tag::ITEM) {
        doc.add_class(item, class::MENU_ITEM);
    }

    doc.set_attribute(toggle, attr::ARIA_CONTROLS, href_target);
}

/// Register every nested list and wire it to its anchor.
pub(crate) fn decorate_submenus<D: Document>(doc: &mut D, menu: D::Node) -> SubmenuTree<D::Node> {
    let lists: alloc::vec::Vec<_> = doc
        .descendants_by_tag(menu, tag::LIST)
        .into_iter()
        .map(|list| (list, doc.previous_element_sibling(list)))
        .collect();
    let submenus = SubmenuTree::build(lists, |n| doc.parent(n));

    for (index, submenu) in submenus.iter() {
        doc.add_class(submenu.list, class::MENU);
        doc.add_class(submenu.list, class::SUBMENU);
        doc.set_attribute(submenu.list, attr::ID, &submenu.id);
        doc.set_attribute(submenu.list, attr::ARIA_LABEL, SUBMENU_LABEL);

        let Some(anchor) = submenu.anchor else {
            tracing::warn!(?index, list = ?submenu.list, "submenu has no anchor sibling");
            continue;
        };
        doc.add_class(anchor, class::SUBMENU_ANCHOR);
        doc.set_attribute(anchor, attr::ARIA_CONTROLS, &submenu.id);
        doc.set_attribute(anchor, attr::ARIA_HASPOPUP, aria_bool(true));
    }
    submenus
}
