// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The switch root: the interactive element.
//!
//! ## State machine
//!
//! The root is in one of `{Off, On} × {Enabled, Disabled, ReadOnly}`.
//! An interaction while `Enabled` flips `Off ↔ On`. Interactions while
//! `Disabled` or `ReadOnly` are self-loops with the default action prevented.
//! There is no terminal state.
//!
//! ## Per-cycle flow
//!
//! Each render cycle the host builds a fresh [`SwitchProps`] and calls
//! [`SwitchRoot::resolve`]:
//!
//! 1. The [`StateResolver`] picks the current value and change requester.
//! 2. The gate is wrapped into a [`ClickHandler`] for the host to call later.
//! 3. The attribute bag is projected from the value and flags.
//!
//! ```
//! use understory_switch::{Flag, SwitchProps, SwitchRoot};
//! use understory_switch::gate::PressEvent;
//!
//! let mut root = SwitchRoot::new();
//! let props = SwitchProps { required: Flag::True, ..Default::default() };
//!
//! let out = root.resolve(&props);
//! assert!(!out.state.checked);
//! out.props.on_click.handle(&mut PressEvent::new());
//!
//! // The write is visible on the next cycle.
//! let out = root.resolve(&props);
//! assert!(out.state.checked);
//! assert_eq!(
//!     out.props.attributes.get("data-state").and_then(|v| v.as_str()),
//!     Some("checked")
//! );
//! ```

use alloc::rc::Rc;
use core::fmt;

use crate::gate::{
    GateOutcome, InteractionEvent, Interactivity, effective_disabled, handle_interaction,
};
use crate::project::{ElementType, project};
use crate::state::{ChangeRequester, ControlMode, ModeMismatch, OnChecked, StateResolver};
use crate::{AttributeBag, Flag};

/// Caller-supplied click handler, run after the switch's own handling.
///
/// It sees every press, including frozen ones, and may inspect or further
/// modify the event.
#[derive(Clone)]
pub struct OnClick(Rc<dyn Fn(&mut dyn InteractionEvent)>);

impl OnClick {
    /// Wrap a handler.
    pub fn new(f: impl Fn(&mut dyn InteractionEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self, event: &mut dyn InteractionEvent) {
        (self.0)(event);
    }
}

impl fmt::Debug for OnClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OnClick").finish_non_exhaustive()
    }
}

/// Per-cycle configuration of a switch root.
#[derive(Clone, Debug, Default)]
pub struct SwitchProps {
    /// Controlled value. `Some` makes the switch controlled.
    pub checked: Option<bool>,
    /// Initial value of an uncontrolled switch, read on the first cycle only.
    pub default_checked: Option<bool>,
    /// Change callback. For controlled switches this is the only way a change takes effect.
    pub on_checked: Option<OnChecked>,
    /// Generic disabled flag. Feeds `aria-disabled` as written.
    pub disabled: Flag,
    /// Disabled override; wins over `disabled` whenever set.
    pub is_disabled: Flag,
    /// Feeds `aria-required`.
    pub required: Flag,
    /// Freezes interaction and feeds `aria-readonly`.
    pub read_only: Flag,
    /// Element kind the root renders as.
    pub element_type: ElementType,
    /// Passthrough attributes, merged last.
    pub rest: AttributeBag,
    /// Passthrough click handler, chained after the switch's own.
    pub on_click: Option<OnClick>,
}

impl SwitchProps {
    /// Effective disabled flag, `is_disabled ?? disabled`.
    pub const fn effective_disabled(&self) -> Flag {
        effective_disabled(self.is_disabled, self.disabled)
    }
}

/// Deferred click handler emitted by [`SwitchRoot::resolve`].
///
/// It captures this cycle's value and flags; calling it never reads newer state.
#[derive(Clone, Debug)]
pub struct ClickHandler {
    checked: bool,
    disabled: Flag,
    read_only: Flag,
    requester: Option<ChangeRequester>,
    chained: Option<OnClick>,
}

impl ClickHandler {
    /// Run the interaction gate for `event`, then the passthrough handler.
    pub fn handle<E: InteractionEvent>(&self, event: &mut E) -> GateOutcome {
        let outcome = handle_interaction(
            event,
            self.checked,
            self.disabled,
            self.read_only,
            self.requester.as_ref(),
        );
        if let Some(chained) = &self.chained {
            chained.call(event);
        }
        outcome
    }
}

/// Element props for the root: attributes plus the click handler.
#[derive(Clone, Debug)]
pub struct RootProps {
    /// Merged attribute bag.
    pub attributes: AttributeBag,
    /// Handler to bind to the element's click/press event.
    pub on_click: ClickHandler,
}

/// State snapshot for caller introspection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootState {
    /// Current value.
    pub checked: bool,
    /// Effective disabled flag.
    pub disabled: Flag,
    /// Raw `is_disabled` prop.
    pub is_disabled: Flag,
}

/// Output of [`SwitchRoot::resolve`].
#[derive(Clone, Debug)]
pub struct RootOutput {
    /// Props to bind to the rendered element.
    pub props: RootProps,
    /// State snapshot.
    pub state: RootState,
}

/// One switch root instance.
///
/// Keep the same instance across render cycles: it owns the uncontrolled value
/// and remembers the control mode fixed on the first cycle.
#[derive(Debug, Default)]
pub struct SwitchRoot {
    resolver: StateResolver,
}

impl SwitchRoot {
    /// Create a fresh instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one render cycle.
    pub fn resolve(&mut self, props: &SwitchProps) -> RootOutput {
        let resolution = self.resolver.resolve(
            props.checked,
            props.default_checked,
            props.on_checked.as_ref(),
        );
        let checked = resolution.value;
        let disabled = props.effective_disabled();

        let on_click = ClickHandler {
            checked,
            disabled,
            read_only: props.read_only,
            requester: resolution.requester,
            chained: props.on_click.clone(),
        };

        let attributes = project(
            checked,
            props.disabled,
            props.is_disabled,
            props.required,
            props.read_only,
            &props.element_type,
            &props.rest,
        );

        RootOutput {
            props: RootProps {
                attributes,
                on_click,
            },
            state: RootState {
                checked,
                disabled,
                is_disabled: props.is_disabled,
            },
        }
    }

    /// Mode fixed by the first cycle, if any.
    pub fn mode(&self) -> Option<ControlMode> {
        self.resolver.mode()
    }

    /// The most recent refused mode change, if any.
    pub fn mode_mismatch(&self) -> Option<ModeMismatch> {
        self.resolver.mode_mismatch()
    }

    /// Interaction component of the state machine for `props`.
    pub const fn interactivity(props: &SwitchProps) -> Interactivity {
        Interactivity::from_flags(props.effective_disabled(), props.read_only)
    }
}
