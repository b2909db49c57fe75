// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_switch::gate::PressEvent;
use understory_switch::{
    AttributeBag, ElementType, Flag, SwitchProps, SwitchRoot, SwitchThumb, ThumbProps,
};

fn props(element_type: ElementType, rest: usize) -> SwitchProps {
    let rest: AttributeBag = (0..rest)
        .map(|i| (format!("data-extra-{i}"), format!("{i}")))
        .collect();
    SwitchProps {
        required: Flag::from(true),
        element_type,
        rest,
        ..Default::default()
    }
}

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("switch_cycle");
    for (name, element_type) in [
        ("button", ElementType::Button),
        ("div", ElementType::from_tag("div")),
    ] {
        for &rest in &[0_usize, 8, 32] {
            let props = props(element_type.clone(), rest);
            group.bench_function(format!("resolve_press_{name}_rest{rest}"), |b| {
                let mut root = SwitchRoot::new();
                b.iter(|| {
                    let out = root.resolve(&props);
                    let thumb = SwitchThumb::resolve(&ThumbProps::from_state(&out.state));
                    black_box(out.props.on_click.handle(&mut PressEvent::new()));
                    black_box(thumb);
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_cycle);
criterion_main!(benches);
