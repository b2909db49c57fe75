// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking for a single interactive surface.
//!
//! ## Overview
//!
//! [`HoverTracker`] turns pointer enter/leave notifications into a boolean
//! "is this surface hovered" signal plus [`HoverEvent`]s on each transition.
//! Callbacks in [`HoverProps`] fire once per transition, never on repeated
//! enters or stray leaves.
//!
//! ## Minimal example
//!
//! ```
//! use understory_hover::{HoverPhase, HoverProps, HoverTracker, PointerKind};
//!
//! let mut hover = HoverTracker::new(HoverProps::default());
//! let ev = hover.pointer_enter(7_u32, PointerKind::Mouse).unwrap();
//! assert_eq!(ev.phase, HoverPhase::Start);
//! assert!(hover.is_hovered());
//!
//! // A second enter while hovered is not a transition.
//! assert!(hover.pointer_enter(7, PointerKind::Mouse).is_none());
//!
//! assert!(hover.pointer_leave(7, PointerKind::Mouse).is_some());
//! assert!(!hover.is_hovered());
//! ```

use alloc::boxed::Box;
use core::fmt;

/// The kind of pointer producing an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad.
    Mouse,
    /// Touch contact.
    Touch,
    /// Stylus.
    Pen,
}

impl PointerKind {
    /// The single-kind set containing this pointer.
    pub const fn as_kinds(self) -> PointerKinds {
        match self {
            Self::Mouse => PointerKinds::MOUSE,
            Self::Touch => PointerKinds::TOUCH,
            Self::Pen => PointerKinds::PEN,
        }
    }
}

bitflags::bitflags! {
    /// Pointer kinds that count as hovering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerKinds: u8 {
        /// Mouse or trackpad.
        const MOUSE = 0b0000_0001;
        /// Touch contact.
        const TOUCH = 0b0000_0010;
        /// Stylus.
        const PEN   = 0b0000_0100;
    }
}

impl Default for PointerKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// Whether a hover began or ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverPhase {
    /// The surface became hovered.
    Start,
    /// The surface stopped being hovered.
    End,
}

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverEvent<K> {
    /// Element the transition happened on.
    pub target: K,
    /// Start or end.
    pub phase: HoverPhase,
    /// Pointer that caused it.
    pub pointer: PointerKind,
}

type EventCallback<K> = Box<dyn FnMut(&HoverEvent<K>)>;

/// Configuration of a [`HoverTracker`].
pub struct HoverProps<K> {
    /// Called on every transition.
    pub on_hover: Option<EventCallback<K>>,
    /// Called when hovering starts.
    pub on_hover_start: Option<EventCallback<K>>,
    /// Called when hovering ends.
    pub on_hover_end: Option<EventCallback<K>>,
    /// Called with the new hovered flag on every transition.
    pub on_hover_change: Option<Box<dyn FnMut(bool)>>,
    /// Ignore all pointer input; ends an active hover when set.
    pub disabled: bool,
    /// Pointer kinds that count as hovering.
    pub pointers: PointerKinds,
}

impl<K> Default for HoverProps<K> {
    fn default() -> Self {
        Self {
            on_hover: None,
            on_hover_start: None,
            on_hover_end: None,
            on_hover_change: None,
            disabled: false,
            pointers: PointerKinds::default(),
        }
    }
}

impl<K> fmt::Debug for HoverProps<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverProps")
            .field("on_hover", &self.on_hover.is_some())
            .field("on_hover_start", &self.on_hover_start.is_some())
            .field("on_hover_end", &self.on_hover_end.is_some())
            .field("on_hover_change", &self.on_hover_change.is_some())
            .field("disabled", &self.disabled)
            .field("pointers", &self.pointers)
            .finish()
    }
}

/// Boolean hover state of one surface.
#[derive(Debug)]
pub struct HoverTracker<K> {
    props: HoverProps<K>,
    current: Option<(K, PointerKind)>,
}

impl<K: Copy> HoverTracker<K> {
    /// Create an un-hovered tracker.
    pub fn new(props: HoverProps<K>) -> Self {
        Self {
            props,
            current: None,
        }
    }

    /// Whether the surface is hovered.
    pub fn is_hovered(&self) -> bool {
        self.current.is_some()
    }

    /// Target and pointer of the active hover, if any.
    pub fn hovered(&self) -> Option<(K, PointerKind)> {
        self.current
    }

    /// Replace the props. Disabling while hovered ends the hover.
    pub fn set_props(&mut self, props: HoverProps<K>) -> Option<HoverEvent<K>> {
        self.props = props;
        if self.props.disabled
            && let Some((target, pointer)) = self.current.take()
        {
            return Some(self.emit(target, HoverPhase::End, pointer));
        }
        None
    }

    /// Toggle `disabled` without replacing the callbacks.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<HoverEvent<K>> {
        self.props.disabled = disabled;
        if disabled && let Some((target, pointer)) = self.current.take() {
            return Some(self.emit(target, HoverPhase::End, pointer));
        }
        None
    }

    /// A pointer entered the surface.
    pub fn pointer_enter(&mut self, target: K, pointer: PointerKind) -> Option<HoverEvent<K>> {
        if !self.accepts(pointer) || self.current.is_some() {
            return None;
        }
        self.current = Some((target, pointer));
        Some(self.emit(target, HoverPhase::Start, pointer))
    }

    /// A pointer left the surface.
    pub fn pointer_leave(&mut self, target: K, pointer: PointerKind) -> Option<HoverEvent<K>> {
        if !self.props.pointers.contains(pointer.as_kinds()) {
            return None;
        }
        self.current.take()?;
        Some(self.emit(target, HoverPhase::End, pointer))
    }

    fn accepts(&self, pointer: PointerKind) -> bool {
        !self.props.disabled && self.props.pointers.contains(pointer.as_kinds())
    }

    fn emit(&mut self, target: K, phase: HoverPhase, pointer: PointerKind) -> HoverEvent<K> {
        let event = HoverEvent {
            target,
            phase,
            pointer,
        };
        tracing::trace!(?phase, ?pointer, "hover transition");
        if let Some(cb) = self.props.on_hover.as_mut() {
            cb(&event);
        }
        let edge = match phase {
            HoverPhase::Start => self.props.on_hover_start.as_mut(),
            HoverPhase::End => self.props.on_hover_end.as_mut(),
        };
        if let Some(cb) = edge {
            cb(&event);
        }
        if let Some(cb) = self.props.on_hover_change.as_mut() {
            cb(phase == HoverPhase::Start);
        }
        event
    }
}
