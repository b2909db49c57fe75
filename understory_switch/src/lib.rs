// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_switch --heading-base-level=0

//! Understory Switch: a headless, accessible toggle control.
//!
//! ## Overview
//!
//! This crate owns the _policy_ of a switch and nothing else. It decides who
//! owns the value, whether an interaction may change it, and which attributes
//! the rendered element should carry. Rendering, event dispatch, and styling
//! are left to the host toolkit.
//!
//! The pieces, leaves first:
//!
//! - [`state`]: controlled vs. uncontrolled resolution ([`StateResolver`](state::StateResolver)).
//! - [`gate`]: disabled/read-only gating and the next-value computation.
//! - [`project`]: ARIA/data attribute projection per element kind.
//! - [`root`]: [`SwitchRoot`], composing the three per render cycle.
//! - [`thumb`]: [`SwitchThumb`], a stateless mirror of the root's value.
//!
//! Supporting types: [`Flag`] (tri-state optional boolean) and
//! [`AttributeBag`] (ordered attributes with last-wins merging).
//!
//! ## Uncontrolled
//!
//! ```rust
//! use understory_switch::{AttrValue, SwitchProps, SwitchRoot};
//! use understory_switch::gate::PressEvent;
//!
//! let mut root = SwitchRoot::new();
//! let props = SwitchProps::default();
//!
//! let out = root.resolve(&props);
//! assert_eq!(out.props.attributes.get("data-state"), Some(&AttrValue::from("unchecked")));
//!
//! out.props.on_click.handle(&mut PressEvent::new());
//! let out = root.resolve(&props);
//! assert_eq!(out.props.attributes.get("data-state"), Some(&AttrValue::from("checked")));
//! ```
//!
//! ## Controlled
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_switch::{OnChecked, SwitchProps, SwitchRoot};
//! use understory_switch::gate::PressEvent;
//!
//! let requested = Rc::new(Cell::new(None));
//! let sink = requested.clone();
//! let props = SwitchProps {
//!     checked: Some(true),
//!     on_checked: Some(OnChecked::new(move |v| sink.set(Some(v)))),
//!     ..Default::default()
//! };
//!
//! let mut root = SwitchRoot::new();
//! let out = root.resolve(&props);
//! out.props.on_click.handle(&mut PressEvent::new());
//!
//! // The caller was asked to turn it off, but still owns the value.
//! assert_eq!(requested.get(), Some(false));
//! assert!(root.resolve(&props).state.checked);
//! ```
//!
//! ## Rendering a thumb
//!
//! ```rust
//! use understory_switch::{AttrValue, SwitchProps, SwitchRoot, SwitchThumb, ThumbProps};
//!
//! let mut root = SwitchRoot::new();
//! let state = root.resolve(&SwitchProps { default_checked: Some(true), ..Default::default() }).state;
//! let thumb = SwitchThumb::resolve(&ThumbProps::from_state(&state));
//! assert_eq!(thumb.attributes.get("data-state"), Some(&AttrValue::from("checked")));
//! ```
//!
//! ## Diagnostics
//!
//! Nothing here fails. Anomalies, such as an instance switching between
//! controlled and uncontrolled, are logged through `tracing` and exposed via
//! [`SwitchRoot::mode_mismatch`]; the established mode is kept.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to dependencies.
//! - `serde`: `Serialize`/`Deserialize` for the plain data types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attrs;
mod flag;

pub mod gate;
pub mod project;
pub mod root;
pub mod state;
pub mod thumb;

pub use attrs::{AttrValue, AttributeBag};
pub use flag::Flag;
pub use project::ElementType;
pub use root::{OnClick, RootOutput, RootState, SwitchProps, SwitchRoot};
pub use state::OnChecked;
pub use thumb::{SwitchThumb, ThumbProps};
