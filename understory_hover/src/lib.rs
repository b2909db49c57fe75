// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hover --heading-base-level=0

//! Understory Hover: hover state for UI surfaces.
//!
//! Hover is a thin layer over platform pointer notifications, but a few
//! details are easy to get wrong: callbacks must fire once per transition,
//! nested elements must see leaves before enters, and listeners must be removed
//! when the element goes away. This crate covers those three shapes:
//!
//! - [`HoverTracker`]: the boolean "is this surface hovered" signal for one
//!   element, with start/end/change callbacks, a disabled switch, and a
//!   pointer-kind filter.
//! - [`path::HoverPath`]: minimal enter/leave transitions between two
//!   root→target paths, for nested hover.
//! - [`listener::HoverListener`]: listener registration on an element with
//!   teardown on drop.
//!
//! ## Nested hover
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use understory_hover::path::{HoverPath, dispatch_transitions};
//! use understory_hover::{HoverProps, HoverTracker, PointerKind};
//!
//! // Only the card (2) and its button (3) care about hover.
//! let mut trackers = BTreeMap::new();
//! trackers.insert(2_u32, HoverTracker::new(HoverProps::default()));
//! trackers.insert(3_u32, HoverTracker::new(HoverProps::default()));
//!
//! let mut path = HoverPath::new();
//! let t = path.update_path(&[1, 2, 3]);
//! dispatch_transitions(&t, PointerKind::Mouse, &mut trackers);
//! assert!(trackers[&2].is_hovered() && trackers[&3].is_hovered());
//!
//! // Pointer slides off the button but stays on the card.
//! let t = path.update_path(&[1, 2]);
//! dispatch_transitions(&t, PointerKind::Mouse, &mut trackers);
//! assert!(trackers[&2].is_hovered());
//! assert!(!trackers[&3].is_hovered());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod listener;
pub mod path;
mod tracker;

pub use tracker::{HoverEvent, HoverPhase, HoverProps, HoverTracker, PointerKind, PointerKinds};
