// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A geometric [`IntersectionObserver`] over Kurbo rectangles.
//!
//! Hosts without a platform observer can compute entries themselves: keep a
//! [`RectObserver`] alongside the scroll container and call
//! [`RectObserver::compute`] with the current viewport whenever it scrolls or
//! resizes. Entries are emitted the way a browser observer reports them: once
//! on the first computation, then only when a target crosses a threshold or
//! starts/stops intersecting.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::observer::{IntersectionEntry, IntersectionObserver, ObserverOptions};

#[derive(Clone, Debug)]
struct Observed<K> {
    target: K,
    // Threshold index and intersecting flag last reported.
    reported: Option<(usize, bool)>,
}

/// Computes [`IntersectionEntry`]s from target bounds and a viewport.
#[derive(Clone, Debug)]
pub struct RectObserver<K> {
    options: ObserverOptions,
    thresholds: Vec<f64>,
    targets: Vec<Observed<K>>,
}

impl<K> Default for RectObserver<K> {
    fn default() -> Self {
        Self {
            options: ObserverOptions::default(),
            thresholds: vec![0.0],
            targets: Vec::new(),
        }
    }
}

impl<K: Clone + PartialEq> RectObserver<K> {
    /// Create an observer with default options and no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options currently applied.
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Observed targets, in observation order.
    pub fn targets(&self) -> impl Iterator<Item = &K> + '_ {
        self.targets.iter().map(|o| &o.target)
    }

    /// Stop observing a single target.
    pub fn unobserve(&mut self, target: &K) {
        self.targets.retain(|o| o.target != *target);
    }

    /// Intersect every observed target with `viewport` grown by the root margin.
    ///
    /// `bounds_of` returns a target's bounds in the viewport's coordinate
    /// space; targets it cannot place are skipped and keep their last report.
    pub fn compute(
        &mut self,
        viewport: Rect,
        mut bounds_of: impl FnMut(&K) -> Option<Rect>,
    ) -> Vec<IntersectionEntry<K>> {
        let root = viewport + self.options.root_margin;
        let mut entries = Vec::new();
        for observed in &mut self.targets {
            let Some(bounds) = bounds_of(&observed.target) else {
                continue;
            };
            let (ratio, is_intersecting) = intersection_ratio(root, bounds);
            let index = self.thresholds.partition_point(|&t| t <= ratio);
            if observed.reported == Some((index, is_intersecting)) {
                continue;
            }
            observed.reported = Some((index, is_intersecting));
            entries.push(IntersectionEntry {
                target: observed.target.clone(),
                is_intersecting,
                ratio,
            });
        }
        entries
    }
}

impl<K: Clone + PartialEq> IntersectionObserver<K> for RectObserver<K> {
    fn configure(&mut self, options: &ObserverOptions) {
        self.thresholds = options.normalized_thresholds();
        self.options = options.clone();
    }

    fn observe(&mut self, target: K) {
        if self.targets.iter().any(|o| o.target == target) {
            return;
        }
        self.targets.push(Observed {
            target,
            reported: None,
        });
    }

    fn disconnect(&mut self) {
        self.targets.clear();
    }
}

/// Visible fraction of `target` inside `root`, and whether they touch.
///
/// Edge-adjacent rectangles intersect with a ratio of zero. A zero-area target
/// that touches the root is fully visible. An inverted root, such as a viewport
/// shrunk past empty by a negative root margin, intersects nothing.
pub fn intersection_ratio(root: Rect, target: Rect) -> (f64, bool) {
    if root.x1 < root.x0 || root.y1 < root.y0 {
        return (0.0, false);
    }
    let target = target.abs();
    let x0 = root.x0.max(target.x0);
    let y0 = root.y0.max(target.y0);
    let x1 = root.x1.min(target.x1);
    let y1 = root.y1.min(target.y1);
    if x0 > x1 || y0 > y1 {
        return (0.0, false);
    }
    let area = target.area();
    if area <= 0.0 {
        return (1.0, true);
    }
    (((x1 - x0) * (y1 - y0) / area).min(1.0), true)
}
