// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Rect};
use understory_active_item::{ActiveItem, ObserverOptions, RectObserver};

const SECTION: f64 = 120.0;
const VIEWPORT: f64 = 800.0;

fn section_bounds(id: &u32) -> Option<Rect> {
    let y = f64::from(*id) * SECTION;
    Some(Rect::new(0.0, y, 1000.0, y + SECTION))
}

fn viewport(scroll: f64) -> Rect {
    Rect::new(0.0, scroll, 1000.0, scroll + VIEWPORT)
}

fn watched(n: u32, options: &ObserverOptions) -> ActiveItem<u32, RectObserver<u32>> {
    let ids: Vec<u32> = (0..n).collect();
    let mut item = ActiveItem::new(RectObserver::new());
    let _ = item.watch(&ids, options, &|_: &u32| true);
    item
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_spy");
    for &n in &[64_u32, 512, 4096] {
        let total = f64::from(n) * SECTION;
        let stops: Vec<f64> = (0..100).map(|i| f64::from(i) * total / 100.0).collect();
        group.throughput(Throughput::Elements(u64::from(n) * stops.len() as u64));
        group.bench_function(format!("scroll_down_n{}", n), |b| {
            b.iter_batched(
                || watched(n, &ObserverOptions::default()),
                |mut item| {
                    for &s in &stops {
                        black_box(item.update(viewport(s), section_bounds));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    let options = ObserverOptions {
        root_margin: Insets::new(0.0, 0.0, 0.0, -VIEWPORT / 2.0),
        thresholds: (0..=10).map(|i| f64::from(i) / 10.0).collect(),
    };
    group.bench_function("scroll_down_thresholds_n512", |b| {
        b.iter_batched(
            || watched(512, &options),
            |mut item| {
                for i in 0..100 {
                    let s = f64::from(i) * 512.0 * SECTION / 100.0;
                    black_box(item.update(viewport(s), section_bounds));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_resubscribe(c: &mut Criterion) {
    let mut group = c.benchmark_group("resubscribe");
    let ids: Vec<u32> = (0..1024).collect();
    let options = ObserverOptions::default();
    group.bench_function("watch_unchanged_n1024", |b| {
        let mut item = watched(1024, &options);
        b.iter(|| black_box(item.watch(&ids, &options, &|_: &u32| true)));
    });
    group.finish();
}

criterion_group!(benches, bench_scroll, bench_resubscribe);
criterion_main!(benches);
