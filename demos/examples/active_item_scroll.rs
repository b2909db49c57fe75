// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table-of-contents highlighting while scrolling a long page.
//!
//! Sections of varying height are stacked vertically. The viewport scrolls
//! down and back up; the active section is printed at each stop. Only the top
//! third of the viewport counts, via a negative bottom root margin.
//!
//! Run:
//! - `cargo run -p understory_demos --example active_item_scroll`

use kurbo::{Insets, Rect};
use tracing_subscriber::filter::LevelFilter;
use understory_active_item::{ActiveItem, ObserverOptions, RectObserver};

const VIEWPORT: f64 = 600.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .init();

    let sections: Vec<(&str, Rect)> = [
        ("overview", 500.0),
        ("install", 300.0),
        ("guide", 1200.0),
        ("api", 800.0),
        ("changelog", 400.0),
    ]
    .into_iter()
    .scan(0.0, |y, (id, height)| {
        let r = Rect::new(0.0, *y, 800.0, *y + height);
        *y += height;
        Some((id, r))
    })
    .collect();
    let bounds_of = |id: &&str| sections.iter().find(|(s, _)| s == id).map(|(_, r)| *r);

    // "missing" has no element and is skipped.
    let ids = ["overview", "install", "missing", "guide", "api", "changelog"];
    let options = ObserverOptions {
        root_margin: Insets::new(0.0, 0.0, 0.0, -VIEWPORT * 2.0 / 3.0),
        thresholds: vec![0.0, 0.5, 1.0],
    };

    let mut toc = ActiveItem::new(RectObserver::new());
    toc.watch(&ids, &options, &|id: &&str| bounds_of(id).is_some());

    for scroll in [0.0, 450.0, 900.0, 2100.0, 2900.0, 1500.0, 600.0] {
        let viewport = Rect::new(0.0, scroll, 800.0, scroll + VIEWPORT);
        let active = toc.update(viewport, bounds_of);
        println!("scroll {scroll:>6}: active = {active:?}");
    }
}
