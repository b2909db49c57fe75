// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested hover over a card with a button inside.
//!
//! The pointer path moves card → button → sibling → outside. Each step's
//! leaves and enters are dispatched to per-element trackers, which print their
//! start/end callbacks. A touch pointer is filtered out by the card.
//!
//! Run:
//! - `cargo run -p understory_demos --example hover_nested`

use std::collections::BTreeMap;

use understory_hover::path::{HoverPath, dispatch_transitions};
use understory_hover::{HoverEvent, HoverProps, HoverTracker, PointerKind, PointerKinds};

const PAGE: u32 = 1;
const CARD: u32 = 2;
const BUTTON: u32 = 3;
const SIBLING: u32 = 4;

fn tracker(name: &'static str, pointers: PointerKinds) -> HoverTracker<u32> {
    HoverTracker::new(HoverProps {
        on_hover_start: Some(Box::new(move |e: &HoverEvent<u32>| {
            println!("  {name}: start ({:?})", e.pointer);
        })),
        on_hover_end: Some(Box::new(move |e: &HoverEvent<u32>| {
            println!("  {name}: end ({:?})", e.pointer);
        })),
        pointers,
        ..Default::default()
    })
}

fn main() {
    let mut trackers = BTreeMap::new();
    trackers.insert(
        CARD,
        tracker("card", PointerKinds::MOUSE | PointerKinds::PEN),
    );
    trackers.insert(BUTTON, tracker("button", PointerKinds::all()));

    let mut path = HoverPath::new();
    let steps: [(&str, &[u32], PointerKind); 5] = [
        ("enter button", &[PAGE, CARD, BUTTON], PointerKind::Mouse),
        ("move to sibling", &[PAGE, CARD, SIBLING], PointerKind::Mouse),
        ("leave page", &[], PointerKind::Mouse),
        ("touch button", &[PAGE, CARD, BUTTON], PointerKind::Touch),
        ("lift", &[], PointerKind::Touch),
    ];

    for (label, next, pointer) in steps {
        println!("{label}:");
        let transitions = path.update_path(next);
        let events = dispatch_transitions(&transitions, pointer, &mut trackers);
        println!(
            "  {} transitions, {} hover events; card hovered = {}",
            transitions.len(),
            events.len(),
            trackers[&CARD].is_hovered()
        );
    }
}
