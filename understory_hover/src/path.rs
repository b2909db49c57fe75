// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested hover: enter/leave transitions along a root→target path.
//!
//! ## Usage
//!
//! 1) Hit test the pointer position in your toolkit and build the root→target path.
//! 2) Call [`HoverPath::update_path`] to get the minimal [`PathTransition`]s.
//! 3) Optionally feed them to per-element [`HoverTracker`]s with [`dispatch_transitions`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_hover::path::{HoverPath, PathTransition};
//! let mut p: HoverPath<u32> = HoverPath::new();
//! assert_eq!(p.update_path(&[1, 2]), vec![PathTransition::Enter(1), PathTransition::Enter(2)]);
//! assert_eq!(p.update_path(&[1, 3]), vec![PathTransition::Leave(2), PathTransition::Enter(3)]);
//! assert!(p.contains(&1));
//! ```

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::tracker::{HoverEvent, HoverTracker, PointerKind};

/// Hovered root→target path of one pointer.
///
/// Leaves are reported inner-most first, enters outer-most first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverPath<K: Copy + Eq> {
    current: Vec<K>,
}

/// A single step between two hover paths.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathTransition<K> {
    /// The pointer is now inside this element.
    Enter(K),
    /// The pointer is no longer inside this element.
    Leave(K),
}

impl<K: Copy + Eq> HoverPath<K> {
    /// Create an empty path.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The hovered root→target path.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// Whether `node` is on the hovered path.
    pub fn contains(&self, node: &K) -> bool {
        self.current.contains(node)
    }

    /// Leave everything, inner-most first.
    pub fn clear(&mut self) -> Vec<PathTransition<K>> {
        let out = self
            .current
            .iter()
            .rev()
            .map(|&k| PathTransition::Leave(k))
            .collect();
        self.current.clear();
        out
    }

    /// Move to `new_path`, returning leaves (inner→outer) then enters (outer→inner).
    pub fn update_path(&mut self, new_path: &[K]) -> Vec<PathTransition<K>> {
        let shared = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out = Vec::with_capacity(self.current.len() - shared + new_path.len() - shared);
        out.extend(
            self.current[shared..]
                .iter()
                .rev()
                .map(|&k| PathTransition::Leave(k)),
        );
        out.extend(new_path[shared..].iter().map(|&k| PathTransition::Enter(k)));

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}

/// Access to per-element hover trackers.
pub trait TrackerLookup<K> {
    /// Tracker for `node`, if that element tracks hover.
    fn tracker_mut(&mut self, node: &K) -> Option<&mut HoverTracker<K>>;
}

impl<K: Ord> TrackerLookup<K> for BTreeMap<K, HoverTracker<K>> {
    fn tracker_mut(&mut self, node: &K) -> Option<&mut HoverTracker<K>> {
        self.get_mut(node)
    }
}

/// Apply path transitions to the trackers of the affected elements.
///
/// Elements without a tracker are skipped. Returns the hover events emitted, in
/// transition order.
pub fn dispatch_transitions<K, L>(
    transitions: &[PathTransition<K>],
    pointer: PointerKind,
    lookup: &mut L,
) -> Vec<HoverEvent<K>>
where
    K: Copy,
    L: TrackerLookup<K> + ?Sized,
{
    transitions
        .iter()
        .filter_map(|t| match *t {
            PathTransition::Enter(k) => lookup.tracker_mut(&k)?.pointer_enter(k, pointer),
            PathTransition::Leave(k) => lookup.tracker_mut(&k)?.pointer_leave(k, pointer),
        })
        .collect()
}
