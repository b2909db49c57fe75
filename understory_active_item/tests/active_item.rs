// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-spy scenarios for `understory_active_item`.
//!
//! A document of stacked sections is scrolled under a fixed-height viewport and
//! the active section is checked after each step.

use kurbo::{Insets, Rect};
use understory_active_item::{
    ActiveItem, IntersectionEntry, IntersectionObserver, ObserverOptions, RectObserver,
};

const IDS: [&str; 4] = ["intro", "install", "usage", "faq"];
const SECTION_HEIGHT: f64 = 400.0;
const VIEWPORT_HEIGHT: f64 = 600.0;

fn bounds(id: &&str) -> Option<Rect> {
    let index = IDS.iter().position(|s| s == id)?;
    let y = index as f64 * SECTION_HEIGHT;
    Some(Rect::new(0.0, y, 800.0, y + SECTION_HEIGHT))
}

fn viewport(scroll: f64) -> Rect {
    Rect::new(0.0, scroll, 800.0, scroll + VIEWPORT_HEIGHT)
}

fn exists(id: &&str) -> bool {
    bounds(id).is_some()
}

#[test]
fn nothing_is_active_before_the_first_batch() {
    let mut toc = ActiveItem::new(RectObserver::new());
    assert!(toc.watch(&IDS, &ObserverOptions::default(), &exists));
    assert_eq!(toc.active(), None);
}

#[test]
fn scrolling_down_moves_the_active_section() {
    let mut toc = ActiveItem::new(RectObserver::new());
    let _ = toc.watch(&IDS, &ObserverOptions::default(), &exists);

    // intro and install are both on screen; install is reported last.
    assert_eq!(toc.update(viewport(0.0), bounds), Some(&"install"));
    // usage comes into view.
    assert_eq!(toc.update(viewport(500.0), bounds), Some(&"usage"));
    // faq is revealed at the bottom.
    assert_eq!(toc.update(viewport(1100.0), bounds), Some(&"faq"));
}

#[test]
fn scrolling_back_up_reveals_earlier_sections() {
    let options = ObserverOptions {
        // Only the top 100 units of the viewport count.
        root_margin: Insets::new(0.0, 0.0, 0.0, -(VIEWPORT_HEIGHT - 100.0)),
        ..Default::default()
    };
    let mut toc = ActiveItem::new(RectObserver::new());
    let _ = toc.watch(&IDS, &options, &exists);

    assert_eq!(toc.update(viewport(0.0), bounds), Some(&"intro"));
    assert_eq!(toc.update(viewport(850.0), bounds), Some(&"usage"));
    assert_eq!(toc.update(viewport(450.0), bounds), Some(&"install"));
}

#[test]
fn scrolling_past_everything_keeps_the_last_section() {
    let mut toc = ActiveItem::new(RectObserver::new());
    let _ = toc.watch(&IDS, &ObserverOptions::default(), &exists);
    let _ = toc.update(viewport(1100.0), bounds);
    assert_eq!(toc.update(viewport(5000.0), bounds), Some(&"faq"));
}

#[test]
fn missing_sections_are_never_active() {
    let mut toc = ActiveItem::new(RectObserver::new());
    let ids = ["intro", "appendix", "install"];
    let _ = toc.watch(&ids, &ObserverOptions::default(), &exists);
    assert_eq!(toc.observer().targets().count(), 2);
    assert_eq!(toc.update(viewport(0.0), bounds), Some(&"install"));
}

#[test]
fn changing_options_resubscribes_with_fresh_reports() {
    let mut toc = ActiveItem::new(RectObserver::new());
    let _ = toc.watch(&IDS, &ObserverOptions::default(), &exists);
    let _ = toc.update(viewport(0.0), bounds);
    // Nothing changed: no entries.
    assert!(toc.observer_mut().compute(viewport(0.0), bounds).is_empty());

    let half = ObserverOptions {
        thresholds: vec![0.5],
        ..Default::default()
    };
    assert!(toc.watch(&IDS, &half, &exists));
    let entries = toc.observer_mut().compute(viewport(0.0), bounds);
    assert_eq!(entries.len(), IDS.len());
}

#[test]
fn host_observers_plug_in() {
    // A host observer that only records what it was asked to do; entries come
    // from the host's own event loop.
    #[derive(Default)]
    struct Host {
        watching: Vec<String>,
        disconnects: usize,
    }

    impl IntersectionObserver<String> for Host {
        fn configure(&mut self, _: &ObserverOptions) {}

        fn observe(&mut self, target: String) {
            self.watching.push(target);
        }

        fn disconnect(&mut self) {
            self.watching.clear();
            self.disconnects += 1;
        }
    }

    let ids: Vec<String> = IDS.iter().map(|s| s.to_string()).collect();
    let mut toc: ActiveItem<String, Host> = ActiveItem::new(Host::default());
    let _ = toc.watch(&ids, &ObserverOptions::default(), &|_: &String| true);
    assert_eq!(toc.observer().watching.len(), IDS.len());

    let batch = [
        IntersectionEntry {
            target: "usage".to_string(),
            is_intersecting: true,
            ratio: 0.25,
        },
        IntersectionEntry {
            target: "intro".to_string(),
            is_intersecting: false,
            ratio: 0.0,
        },
    ];
    assert_eq!(
        toc.handle_entries(&batch).map(String::as_str),
        Some("usage")
    );
    assert_eq!(toc.observer().disconnects, 1);
}
