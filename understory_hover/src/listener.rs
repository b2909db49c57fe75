// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener-backed hover: subscribe to an element, unsubscribe on drop.
//!
//! Some hosts deliver hover through listeners registered on a node rather than
//! through props. [`HoverListener`] registers the enter/leave listeners when
//! attached and removes them exactly once, on [`HoverListener::detach`] or
//! when dropped.
//!
//! ```
//! use understory_hover::listener::{EventTarget, HoverListener, ListenerKind};
//!
//! #[derive(Default)]
//! struct Node { listeners: Vec<ListenerKind> }
//!
//! impl EventTarget for Node {
//!     fn add_listener(&mut self, kind: ListenerKind) { self.listeners.push(kind); }
//!     fn remove_listener(&mut self, kind: ListenerKind) { self.listeners.retain(|k| *k != kind); }
//! }
//!
//! let mut node = Node::default();
//! {
//!     let mut hover = HoverListener::attach(Some(&mut node));
//!     hover.dispatch(ListenerKind::MouseEnter);
//!     assert!(hover.is_hovered());
//! }
//! assert!(node.listeners.is_empty());
//! ```

/// Listener kinds a [`HoverListener`] registers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer entered the element.
    MouseEnter,
    /// Pointer left the element.
    MouseLeave,
}

impl ListenerKind {
    /// Both kinds, in registration order.
    pub const ALL: [Self; 2] = [Self::MouseEnter, Self::MouseLeave];
}

/// An element that accepts listener registrations.
pub trait EventTarget {
    /// Register the hover listener for `kind`.
    fn add_listener(&mut self, kind: ListenerKind);
    /// Remove the hover listener for `kind`.
    fn remove_listener(&mut self, kind: ListenerKind);
}

impl<T: EventTarget + ?Sized> EventTarget for &mut T {
    fn add_listener(&mut self, kind: ListenerKind) {
        (**self).add_listener(kind);
    }

    fn remove_listener(&mut self, kind: ListenerKind) {
        (**self).remove_listener(kind);
    }
}

/// Hover state bound to an element's listeners.
#[derive(Debug)]
pub struct HoverListener<T: EventTarget> {
    target: Option<T>,
    hovered: bool,
}

impl<T: EventTarget> HoverListener<T> {
    /// Register on `target`. With no target, nothing is registered and the
    /// listener stays un-hovered.
    pub fn attach(mut target: Option<T>) -> Self {
        if let Some(t) = target.as_mut() {
            for kind in ListenerKind::ALL {
                t.add_listener(kind);
            }
        }
        Self {
            target,
            hovered: false,
        }
    }

    /// Whether the element is hovered.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a target is attached.
    pub fn is_attached(&self) -> bool {
        self.target.is_some()
    }

    /// Deliver a listener notification. Returns `true` if the hovered flag changed.
    ///
    /// Ignored once detached.
    pub fn dispatch(&mut self, kind: ListenerKind) -> bool {
        if self.target.is_none() {
            return false;
        }
        let hovered = kind == ListenerKind::MouseEnter;
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    /// Remove the listeners and hand the target back.
    pub fn detach(mut self) -> Option<T> {
        self.release()
    }

    fn release(&mut self) -> Option<T> {
        let mut target = self.target.take()?;
        for kind in ListenerKind::ALL {
            target.remove_listener(kind);
        }
        self.hovered = false;
        tracing::trace!("hover listeners removed");
        Some(target)
    }
}

impl<T: EventTarget> Drop for HoverListener<T> {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Spy {
        added: Vec<ListenerKind>,
        removed: Vec<ListenerKind>,
    }

    impl EventTarget for Spy {
        fn add_listener(&mut self, kind: ListenerKind) {
            self.added.push(kind);
        }

        fn remove_listener(&mut self, kind: ListenerKind) {
            self.removed.push(kind);
        }
    }

    #[test]
    fn no_target_stays_unhovered() {
        let mut hover: HoverListener<Spy> = HoverListener::attach(None);
        assert!(!hover.is_attached());
        assert!(!hover.dispatch(ListenerKind::MouseEnter));
        assert!(!hover.is_hovered());
    }

    #[test]
    fn enter_and_leave_flip_the_flag() {
        let mut hover = HoverListener::attach(Some(Spy::default()));
        assert!(!hover.is_hovered());
        assert!(hover.dispatch(ListenerKind::MouseEnter));
        assert!(hover.is_hovered());
        assert!(!hover.dispatch(ListenerKind::MouseEnter));
        assert!(hover.dispatch(ListenerKind::MouseLeave));
        assert!(!hover.is_hovered());
    }

    #[test]
    fn detach_removes_each_listener_once() {
        let hover = HoverListener::attach(Some(Spy::default()));
        let spy = hover.detach().unwrap();
        assert_eq!(spy.added, ListenerKind::ALL);
        assert_eq!(spy.removed, ListenerKind::ALL);
    }

    #[test]
    fn drop_removes_listeners() {
        let mut spy = Spy::default();
        {
            let mut hover = HoverListener::attach(Some(&mut spy));
            let _ = hover.dispatch(ListenerKind::MouseEnter);
        }
        assert_eq!(spy.added, ListenerKind::ALL);
        assert_eq!(spy.removed, ListenerKind::ALL);
    }
}
