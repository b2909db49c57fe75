// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The observer protocol: options, entries, and host lookups.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Insets;

/// Options an observer is configured with.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Grows (positive) or shrinks (negative) the root before intersecting.
    pub root_margin: Insets,
    /// Intersection ratios in `[0, 1]` at which entries are reported.
    pub thresholds: Vec<f64>,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin: Insets::ZERO,
            thresholds: vec![0.0],
        }
    }
}

impl ObserverOptions {
    /// Thresholds clamped to `[0, 1]`, sorted, and deduplicated.
    ///
    /// NaNs are dropped; an empty list becomes `[0.0]`.
    pub fn normalized_thresholds(&self) -> Vec<f64> {
        let mut out: Vec<f64> = self
            .thresholds
            .iter()
            .filter(|t| !t.is_nan())
            .map(|t| t.clamp(0.0, 1.0))
            .collect();
        out.sort_by(f64::total_cmp);
        out.dedup();
        if out.is_empty() {
            out.push(0.0);
        }
        out
    }
}

/// A change in how much of a target is visible.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<K> {
    /// The observed item.
    pub target: K,
    /// Whether the target touches or overlaps the root.
    pub is_intersecting: bool,
    /// Visible fraction of the target, in `[0, 1]`.
    pub ratio: f64,
}

/// A source of intersection entries, such as a platform observer.
pub trait IntersectionObserver<K> {
    /// Apply options. Called before any `observe` of a new subscription.
    fn configure(&mut self, options: &ObserverOptions);
    /// Start reporting entries for `target`.
    fn observe(&mut self, target: K);
    /// Stop reporting entries for every target.
    fn disconnect(&mut self);
}

/// Resolves item ids to live elements.
///
/// Ids that cannot name an element, such as empty strings, must report
/// `false`; [`ActiveItem::watch`](crate::ActiveItem::watch) observes exactly
/// the ids this accepts.
pub trait ElementLookup<K: ?Sized> {
    /// Whether an element exists for `id`.
    fn exists(&self, id: &K) -> bool;
}

impl<K: ?Sized, F: Fn(&K) -> bool> ElementLookup<K> for F {
    fn exists(&self, id: &K) -> bool {
        self(id)
    }
}
