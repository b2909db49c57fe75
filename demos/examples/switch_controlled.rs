// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled switch owned by the caller, plus the mode-change warning.
//!
//! The caller keeps the value in its own cell and feeds it back every cycle.
//! Halfway through, the caller "forgets" to pass `checked`, which would make
//! the switch uncontrolled; the root keeps the controlled mode and logs a
//! warning instead.
//!
//! Run:
//! - `cargo run -p understory_demos --example switch_controlled`

use std::cell::Cell;
use std::rc::Rc;

use tracing_subscriber::filter::LevelFilter;
use understory_switch::gate::PressEvent;
use understory_switch::{OnChecked, SwitchProps, SwitchRoot};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_target(false)
        .init();

    let value = Rc::new(Cell::new(false));
    let sink = value.clone();
    let on_checked = OnChecked::new(move |next| {
        tracing::info!(next, "caller accepts change");
        sink.set(next);
    });

    let mut root = SwitchRoot::new();
    for cycle in 0..4 {
        let props = SwitchProps {
            // Cycle 2 drops the controlled value.
            checked: (cycle != 2).then(|| value.get()),
            on_checked: Some(on_checked.clone()),
            ..Default::default()
        };
        let out = root.resolve(&props);
        tracing::info!(cycle, checked = out.state.checked, mode = ?root.mode(), "resolved");
        let _ = out.props.on_click.handle(&mut PressEvent::new());
    }

    if let Some(mismatch) = root.mode_mismatch() {
        println!("last refused mode change: {mismatch}");
    }
}
