// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_hover` crate.
//!
//! These exercise the listener lifecycle the way a host element would drive it,
//! and check that the tracker's callbacks agree with its boolean state.

use std::cell::RefCell;
use std::rc::Rc;

use understory_hover::listener::{EventTarget, HoverListener, ListenerKind};
use understory_hover::{HoverEvent, HoverPhase, HoverProps, HoverTracker, PointerKind};

#[derive(Default)]
struct Element {
    added: Vec<ListenerKind>,
    removed: Vec<ListenerKind>,
}

impl EventTarget for Element {
    fn add_listener(&mut self, kind: ListenerKind) {
        self.added.push(kind);
    }

    fn remove_listener(&mut self, kind: ListenerKind) {
        self.removed.push(kind);
    }
}

#[test]
fn initially_not_hovered_without_an_element() {
    let hover: HoverListener<Element> = HoverListener::attach(None);
    assert!(!hover.is_hovered());
}

#[test]
fn enter_then_leave() {
    let mut hover = HoverListener::attach(Some(Element::default()));
    assert!(!hover.is_hovered());

    hover.dispatch(ListenerKind::MouseEnter);
    assert!(hover.is_hovered());

    hover.dispatch(ListenerKind::MouseLeave);
    assert!(!hover.is_hovered());
}

#[test]
fn listeners_are_registered_and_cleaned_up() {
    let mut element = Element::default();
    let hover = HoverListener::attach(Some(&mut element));
    drop(hover);

    assert!(element.added.contains(&ListenerKind::MouseEnter));
    assert!(element.added.contains(&ListenerKind::MouseLeave));
    assert!(element.removed.contains(&ListenerKind::MouseEnter));
    assert!(element.removed.contains(&ListenerKind::MouseLeave));
    assert_eq!(element.removed.len(), 2);
}

#[test]
fn change_callback_mirrors_tracker_state() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let props: HoverProps<&'static str> = HoverProps {
        on_hover_change: Some(Box::new(move |h: bool| sink.borrow_mut().push(h))),
        ..Default::default()
    };
    let mut hover = HoverTracker::new(props);

    let start = hover.pointer_enter("card", PointerKind::Touch);
    assert_eq!(
        start,
        Some(HoverEvent {
            target: "card",
            phase: HoverPhase::Start,
            pointer: PointerKind::Touch,
        })
    );
    let _ = hover.pointer_leave("card", PointerKind::Touch);
    let _ = hover.pointer_leave("card", PointerKind::Touch);

    assert_eq!(*seen.borrow(), [true, false]);
    assert!(!hover.is_hovered());
}
