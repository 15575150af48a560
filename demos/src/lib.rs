// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the demos.

use understory_nav::Document;
use understory_nav::memory::{ElementId, MemoryDocument};

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `debug`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Handles into the site header built by [`site_header`].
#[derive(Debug)]
pub struct SiteHeader {
    /// The document holding the header.
    pub doc: MemoryDocument,
    /// "Menu" toggle link.
    pub toggle: ElementId,
    /// `ul#primary-nav`.
    pub menu: ElementId,
    /// Anchor of the "Services" submenu.
    pub services: ElementId,
    /// Anchor of the nested "Consulting" submenu.
    pub consulting: ElementId,
    /// Anchor of the "About" submenu.
    pub about: ElementId,
}

/// A typical site header: a toggle and a three-item menu with two submenus,
/// one of which nests a third.
pub fn site_header(viewport_width: f64) -> SiteHeader {
    let mut doc = MemoryDocument::with_viewport_width(viewport_width);
    let html = doc.html();
    doc.add_class(html, "no-js");
    let body = doc.body();
    let header = doc.create_element(body, "header");

    let toggle = doc.create_element(header, "a");
    doc.set_attribute(toggle, "href", "#primary-nav");
    doc.set_attribute(toggle, "data-responsive-nav-control", "primary-nav");

    let nav = doc.create_element(header, "nav");
    let menu = doc.create_element(nav, "ul");
    doc.set_attribute(menu, "id", "primary-nav");

    let link = |doc: &mut MemoryDocument, list: ElementId, href: &str| {
        let item = doc.create_element(list, "li");
        let a = doc.create_element(item, "a");
        doc.set_attribute(a, "href", href);
        (item, a)
    };

    link(&mut doc, menu, "/");
    let (services_item, services) = link(&mut doc, menu, "/services");
    let services_list = doc.create_element(services_item, "ul");
    let (consulting_item, consulting) = link(&mut doc, services_list, "/services/consulting");
    let consulting_list = doc.create_element(consulting_item, "ul");
    link(&mut doc, consulting_list, "/services/consulting/audits");
    link(&mut doc, services_list, "/services/training");
    let (about_item, about) = link(&mut doc, menu, "/about");
    let about_list = doc.create_element(about_item, "ul");
    link(&mut doc, about_list, "/about/team");

    SiteHeader {
        doc,
        toggle,
        menu,
        services,
        consulting,
        about,
    }
}
