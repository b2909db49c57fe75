// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction gating: who may flip the switch.
//!
//! Disabled and read-only switches are frozen. An interaction on a frozen
//! switch has its platform default action suppressed and changes nothing.
//! Otherwise the next value is the negation of the current one and is handed to
//! the [`ChangeRequester`], if there is one.
//!
//! ```
//! use understory_switch::Flag;
//! use understory_switch::gate::{GateOutcome, PressEvent, handle_interaction};
//!
//! let mut press = PressEvent::new();
//! let outcome = handle_interaction(&mut press, false, Flag::Unset, Flag::True, None);
//! assert_eq!(outcome, GateOutcome::Suppressed);
//! assert!(press.is_default_prevented());
//! ```

use crate::Flag;
use crate::state::ChangeRequester;

/// The slice of a platform event that interaction gating needs.
pub trait InteractionEvent {
    /// Suppress the platform default action for this event.
    fn prevent_default(&mut self);
}

impl<T: InteractionEvent + ?Sized> InteractionEvent for &mut T {
    fn prevent_default(&mut self) {
        (**self).prevent_default();
    }
}

/// A plain press/click event for hosts without their own event type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PressEvent {
    default_prevented: bool,
}

impl PressEvent {
    /// Create an event whose default action has not been prevented.
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Whether [`InteractionEvent::prevent_default`] was called.
    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl InteractionEvent for PressEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// What [`handle_interaction`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Disabled or read-only: default prevented, no change requested.
    Suppressed,
    /// A change to the contained value was requested.
    Requested(bool),
    /// Allowed, but there was no requester to receive the contained value.
    Dropped(bool),
}

/// The interaction component of the switch state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interactivity {
    /// Interactions toggle the value.
    Enabled,
    /// Frozen by the effective disabled flag.
    Disabled,
    /// Frozen by `read_only`.
    ReadOnly,
}

impl Interactivity {
    /// Classify from the effective disabled flag and `read_only`.
    ///
    /// Disabled takes precedence when both are set.
    pub const fn from_flags(disabled: Flag, read_only: Flag) -> Self {
        if disabled.is_true() {
            Self::Disabled
        } else if read_only.is_true() {
            Self::ReadOnly
        } else {
            Self::Enabled
        }
    }

    /// Returns `true` unless [`Interactivity::Enabled`].
    pub const fn is_frozen(self) -> bool {
        !matches!(self, Self::Enabled)
    }
}

/// Effective disabled state: `is_disabled ?? disabled`.
///
/// An explicit `is_disabled` (including [`Flag::False`]) always wins.
#[inline]
pub const fn effective_disabled(is_disabled: Flag, disabled: Flag) -> Flag {
    is_disabled.or(disabled)
}

/// Gate one interaction and request the next value if allowed.
///
/// `disabled` is the effective flag (see [`effective_disabled`]).
pub fn handle_interaction<E: InteractionEvent + ?Sized>(
    event: &mut E,
    current: bool,
    disabled: Flag,
    read_only: Flag,
    requester: Option<&ChangeRequester>,
) -> GateOutcome {
    if Interactivity::from_flags(disabled, read_only).is_frozen() {
        event.prevent_default();
        tracing::trace!(checked = current, "switch interaction suppressed");
        return GateOutcome::Suppressed;
    }
    let next = !current;
    match requester {
        Some(requester) => {
            requester.request(next);
            GateOutcome::Requested(next)
        }
        None => {
            tracing::trace!(next, "switch change dropped: no requester");
            GateOutcome::Dropped(next)
        }
    }
}
