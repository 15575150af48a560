// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation configuration.
//!
//! Load a partial JSON configuration (missing keys fall back to defaults),
//! run the widget in click mode and show how Escape returns focus.
//!
//! Run:
//! - `cargo run -p understory_demos --example nav_config`

use understory_demos::{init_tracing, site_header};
use understory_nav::{Emitter, Key, NamedKey, NavConfig, NavInput, Navigation};

fn main() {
    init_tracing();

    let config: NavConfig = match serde_json::from_str(r#"{ "action": "click" }"#) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };
    println!(
        "config: action={} breakpoint={}",
        config.action, config.breakpoint
    );

    let mut header = site_header(1280.0);
    let doc = &mut header.doc;
    let Ok(mut nav) = Navigation::create(doc, "#primary-nav", config, Emitter::new()) else {
        return;
    };

    // Click mode: focusing an anchor does nothing, clicking it opens.
    nav.handle(doc, NavInput::Focus(header.about));
    println!("after focus: {:?}", nav.open_submenus(&*doc));
    nav.handle(doc, NavInput::Click(header.about));
    println!("after click: {:?}", nav.open_submenus(&*doc));

    nav.handle(doc, NavInput::KeyUp(Key::Named(NamedKey::Escape)));
    println!(
        "after Escape: {:?}, focus back on about: {}",
        nav.open_submenus(&*doc),
        doc.focused() == Some(header.about)
    );

    // A misconfigured target is reported, not panicked on.
    let mut other = site_header(1280.0);
    let result = Navigation::create(
        &mut other.doc,
        "#missing",
        NavConfig::default(),
        Emitter::new(),
    );
    if let Err(err) = result {
        println!("expected error: {err}");
    }
}
