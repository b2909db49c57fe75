// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracking the most recently revealed item.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::observer::{ElementLookup, IntersectionEntry, IntersectionObserver, ObserverOptions};
use crate::rect::RectObserver;

/// The item most recently reported as intersecting the viewport.
///
/// An `ActiveItem` owns one observer subscription. [`ActiveItem::watch`]
/// re-subscribes when the item list or the options change, and
/// [`ActiveItem::handle_entries`] folds observer batches into the active id.
/// Items leaving the viewport never clear the active id: it only moves when
/// another item is revealed.
///
/// The subscription is disconnected on drop.
#[derive(Debug)]
pub struct ActiveItem<K, O: IntersectionObserver<K>> {
    observer: O,
    items: Vec<K>,
    options: Option<ObserverOptions>,
    active: Option<K>,
}

impl<K: Clone + PartialEq, O: IntersectionObserver<K>> ActiveItem<K, O> {
    /// Wrap `observer`. Nothing is observed until [`ActiveItem::watch`].
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            items: Vec::new(),
            options: None,
            active: None,
        }
    }

    /// The active item id, if any item has been revealed.
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// The underlying observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The underlying observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Ids passed to the last subscription.
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Subscribe to `items` with `options`.
    ///
    /// Returns `false` without touching the observer when both are unchanged
    /// since the last call. Otherwise the previous subscription is
    /// disconnected, the observer is reconfigured, and every id that `lookup`
    /// resolves is observed; unresolved ids, including empty ones, are skipped.
    /// The active id is kept.
    pub fn watch<L>(&mut self, items: &[K], options: &ObserverOptions, lookup: &L) -> bool
    where
        L: ElementLookup<K> + ?Sized,
    {
        if self.options.as_ref() == Some(options) && self.items == items {
            return false;
        }
        self.observer.disconnect();
        self.observer.configure(options);
        let mut skipped = 0_usize;
        for id in items {
            if lookup.exists(id) {
                self.observer.observe(id.clone());
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::trace!(
                skipped,
                "active item: ids without an element were not observed"
            );
        }
        self.items.clear();
        self.items.extend_from_slice(items);
        self.options = Some(options.clone());
        true
    }

    /// Fold a batch of observer entries into the active id.
    ///
    /// The last intersecting entry in the batch wins. Non-intersecting entries
    /// are ignored. Returns the active id after the batch.
    pub fn handle_entries(&mut self, entries: &[IntersectionEntry<K>]) -> Option<&K> {
        if let Some(entry) = entries.iter().rev().find(|e| e.is_intersecting) {
            self.active = Some(entry.target.clone());
        }
        self.active.as_ref()
    }

    /// Stop observing. The active id is kept.
    pub fn unwatch(&mut self) {
        if self.options.take().is_some() {
            self.observer.disconnect();
        }
        self.items.clear();
    }
}

impl<K: Clone + PartialEq> ActiveItem<K, RectObserver<K>> {
    /// Compute entries for `viewport` and fold them in.
    ///
    /// See [`RectObserver::compute`] for how `bounds_of` is used.
    pub fn update(
        &mut self,
        viewport: Rect,
        bounds_of: impl FnMut(&K) -> Option<Rect>,
    ) -> Option<&K> {
        let entries = self.observer.compute(viewport, bounds_of);
        self.handle_entries(&entries)
    }
}

impl<K, O: IntersectionObserver<K>> Drop for ActiveItem<K, O> {
    fn drop(&mut self) {
        if self.options.is_some() {
            self.observer.disconnect();
        }
    }
}
