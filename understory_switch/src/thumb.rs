// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The switch thumb: a presentational mirror of the root.
//!
//! The thumb owns no state and emits no handler. Pass it the same `checked`
//! and disabled flags as the root each cycle; [`ThumbProps::from_state`] does
//! that from a [`RootState`] snapshot.

use crate::gate::effective_disabled;
use crate::project::DataState;
use crate::root::RootState;
use crate::{AttributeBag, Flag};

/// Per-cycle configuration of a switch thumb.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThumbProps {
    /// Value to mirror; unset renders as unchecked.
    pub checked: Option<bool>,
    /// Generic disabled flag.
    pub disabled: Flag,
    /// Disabled override; wins over `disabled` whenever set.
    pub is_disabled: Flag,
    /// Passthrough attributes, merged last.
    pub rest: AttributeBag,
}

impl ThumbProps {
    /// Mirror a root snapshot.
    pub fn from_state(state: &RootState) -> Self {
        Self {
            checked: Some(state.checked),
            disabled: state.disabled,
            is_disabled: state.is_disabled,
            rest: AttributeBag::new(),
        }
    }
}

/// Output of [`SwitchThumb::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbOutput {
    /// Merged attribute bag.
    pub attributes: AttributeBag,
}

/// Stateless thumb controller.
#[derive(Copy, Clone, Debug, Default)]
pub struct SwitchThumb;

impl SwitchThumb {
    /// Derive the thumb attributes for one cycle.
    pub fn resolve(props: &ThumbProps) -> ThumbOutput {
        let derived = AttributeBag::new()
            .with(
                "data-state",
                DataState::from_checked(props.checked.unwrap_or(false)),
            )
            .with(
                "data-disabled",
                effective_disabled(props.is_disabled, props.disabled),
            );
        ThumbOutput {
            attributes: AttributeBag::merge([&derived, &props.rest]),
        }
    }
}
