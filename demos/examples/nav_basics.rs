// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation basics.
//!
//! Decorate a site header, then walk through the small-screen toggle, a
//! breakpoint crossing and hover-style focus navigation, printing ARIA state
//! and lifecycle events as they happen.
//!
//! Run:
//! - `cargo run -p understory_demos --example nav_basics`
//! - `RUST_LOG=understory_nav=trace cargo run -p understory_demos --example nav_basics`

use understory_demos::{init_tracing, site_header};
use understory_nav::memory::{ElementId, MemoryDocument};
use understory_nav::{
    Document, Emitter, Key, NamedKey, NavConfig, NavEventKind, NavInput, Navigation,
};

fn show(doc: &MemoryDocument, label: &str, node: ElementId) {
    println!(
        "  {label:<10} class={:?} aria-hidden={:?} aria-expanded={:?}",
        doc.attribute(node, "class").unwrap_or_default(),
        doc.attribute(node, "aria-hidden"),
        doc.attribute(node, "aria-expanded"),
    );
}

fn main() {
    init_tracing();

    let mut header = site_header(375.0);
    let events = Emitter::new()
        .on(NavEventKind::Create, |e| println!("event: {e:?}"))
        .on(NavEventKind::Open, |e| println!("event: {e:?}"))
        .on(NavEventKind::Close, |e| println!("event: {e:?}"))
        .on(NavEventKind::SubmenuOpen, |e| println!("event: {e:?}"))
        .on(NavEventKind::SubmenuClose, |e| println!("event: {e:?}"));

    let created = Navigation::create(
        &mut header.doc,
        "#primary-nav",
        NavConfig::default(),
        events,
    );
    let mut nav = match created {
        Ok(nav) => nav,
        Err(err) => {
            eprintln!("failed to create navigation: {err}");
            return;
        }
    };
    let doc = &mut header.doc;

    println!("small screen, after create:");
    show(doc, "toggle", header.toggle);
    show(doc, "menu", header.menu);

    let response = nav.handle(doc, NavInput::Click(header.toggle));
    println!("toggle click -> {response:?}, focus on {:?}", doc.focused());
    show(doc, "menu", header.menu);

    nav.handle(doc, NavInput::Click(header.services));
    nav.handle(doc, NavInput::Click(header.consulting));
    println!("open submenus: {:?}", nav.open_submenus(&*doc));

    // Closing the parent closes the nested submenu first.
    nav.handle(doc, NavInput::Click(header.services));
    println!("after closing services, focus on {:?}", doc.focused());

    if doc.set_viewport_width(1280.0) {
        nav.handle(doc, NavInput::MediaChange);
    }
    println!("large screen:");
    show(doc, "toggle", header.toggle);
    show(doc, "menu", header.menu);

    nav.handle(doc, NavInput::Focus(header.services));
    nav.handle(doc, NavInput::Focus(header.about));
    println!("after focus moves to about: {:?}", nav.open_submenus(&*doc));

    nav.handle(doc, NavInput::KeyUp(Key::Named(NamedKey::Escape)));
    println!("after Escape: {:?}", nav.open_submenus(&*doc));

    nav.dispose(doc);
    println!("disposed; {} listeners left", doc.listener_count());
}
