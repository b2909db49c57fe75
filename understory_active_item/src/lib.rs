// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_active_item --heading-base-level=0

//! Understory Active Item: which item of a list is currently on screen.
//!
//! Tables of contents and navigation rails highlight the section the reader is
//! looking at. This crate tracks that "active" id from viewport intersections:
//!
//! - [`ActiveItem`]: owns one observer subscription over a list of item ids
//!   and folds intersection entries into the active id. The last item revealed
//!   wins; items scrolling away never clear it.
//! - [`IntersectionObserver`]: the seam to the host's observer. Platform hosts
//!   forward their own observer; others use [`RectObserver`].
//! - [`RectObserver`]: computes entries from Kurbo rectangles, honoring root
//!   margins and thresholds.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Insets, Rect};
//! use understory_active_item::{ActiveItem, ObserverOptions, RectObserver};
//!
//! // Three stacked sections, 300 units tall each.
//! let section = |id: &&str| {
//!     let index = ["intro", "usage", "faq"].iter().position(|s| s == id)?;
//!     let y = index as f64 * 300.0;
//!     Some(Rect::new(0.0, y, 800.0, y + 300.0))
//! };
//!
//! let mut toc = ActiveItem::new(RectObserver::new());
//! // Only the top 40% of the viewport counts as "reading".
//! let options = ObserverOptions {
//!     root_margin: Insets::new(0.0, 0.0, 0.0, -360.0),
//!     ..Default::default()
//! };
//! toc.watch(&["intro", "usage", "faq"], &options, &|id: &&str| section(id).is_some());
//!
//! assert_eq!(toc.update(Rect::new(0.0, 0.0, 800.0, 600.0), section), Some(&"intro"));
//! assert_eq!(toc.update(Rect::new(0.0, 350.0, 800.0, 950.0), section), Some(&"usage"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod active;
pub mod observer;
mod rect;

pub use active::ActiveItem;
pub use observer::{ElementLookup, IntersectionEntry, IntersectionObserver, ObserverOptions};
pub use rect::{RectObserver, intersection_ratio};
