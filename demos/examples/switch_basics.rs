// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uncontrolled switch: render, press, render again.
//!
//! Shows the attributes a host would put on a `<button>` and on its thumb as
//! the switch flips, and what a disabled switch does with a press.
//!
//! Run:
//! - `cargo run -p understory_demos --example switch_basics`

use understory_switch::gate::PressEvent;
use understory_switch::{AttributeBag, Flag, SwitchProps, SwitchRoot, SwitchThumb, ThumbProps};

fn render(label: &str, attributes: &AttributeBag) {
    let parts: Vec<String> = attributes
        .rendered()
        .map(|(k, v)| format!("{k}={v:?}"))
        .collect();
    println!("  {label}: {}", parts.join(" "));
}

fn main() {
    let mut root = SwitchRoot::new();
    let props = SwitchProps {
        rest: AttributeBag::new().with("id", "airplane-mode"),
        ..Default::default()
    };

    for cycle in 0..3 {
        let out = root.resolve(&props);
        println!("cycle {cycle}: checked={}", out.state.checked);
        render("root", &out.props.attributes);
        render(
            "thumb",
            &SwitchThumb::resolve(&ThumbProps::from_state(&out.state)).attributes,
        );
        let outcome = out.props.on_click.handle(&mut PressEvent::new());
        println!("  press -> {outcome:?}");
    }

    let mut frozen = SwitchRoot::new();
    let disabled = SwitchProps {
        disabled: Flag::from(true),
        ..Default::default()
    };
    let out = frozen.resolve(&disabled);
    let mut press = PressEvent::new();
    let outcome = out.props.on_click.handle(&mut press);
    println!(
        "disabled press -> {outcome:?} (default prevented: {})",
        press.is_default_prevented()
    );
}
