// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled vs. uncontrolled state resolution.
//!
//! ## Overview
//!
//! A switch is **controlled** when the caller passes `checked`: the caller owns
//! the value and the switch only relays change requests through `on_checked`.
//! Otherwise it is **uncontrolled** and the value lives in a [`StateCell`]
//! owned by the [`StateResolver`], seeded once from `default_checked`.
//!
//! ## Write visibility
//!
//! Writes made through the internal setter are staged. They become visible at
//! the next [`StateResolver::resolve`], never within the handler invocation
//! that made them:
//!
//! ```
//! use understory_switch::state::StateResolver;
//!
//! let mut resolver = StateResolver::new();
//! let first = resolver.resolve(None, Some(false), None);
//! assert!(!first.value);
//!
//! first.requester.as_ref().unwrap().request(true);
//! // Still the old value until the next cycle.
//! assert!(!first.value);
//!
//! let second = resolver.resolve(None, Some(false), None);
//! assert!(second.value);
//! ```

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

/// Who owns the switch value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlMode {
    /// The caller owns the value and receives change requests.
    Controlled,
    /// The switch owns the value; the caller only seeds it.
    Uncontrolled,
}

impl ControlMode {
    /// Mode implied by the presence of a `checked` prop.
    pub const fn from_checked(checked: Option<bool>) -> Self {
        match checked {
            Some(_) => Self::Controlled,
            None => Self::Uncontrolled,
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Controlled => "controlled",
            Self::Uncontrolled => "uncontrolled",
        })
    }
}

/// A switch instance changed [`ControlMode`] during its lifetime.
///
/// The resolver keeps the established mode and reports this instead of failing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeMismatch {
    /// Mode fixed by the first resolution.
    pub established: ControlMode,
    /// Mode implied by the offending configuration.
    pub requested: ControlMode,
}

impl fmt::Display for ModeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "switch changed from {} to {}; staying {}",
            self.established, self.requested, self.established
        )
    }
}

impl core::error::Error for ModeMismatch {}

/// Caller-supplied change callback for controlled switches.
#[derive(Clone)]
pub struct OnChecked(Rc<dyn Fn(bool)>);

impl OnChecked {
    /// Wrap a callback.
    pub fn new(f: impl Fn(bool) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback.
    pub fn call(&self, checked: bool) {
        (self.0)(checked);
    }
}

impl fmt::Debug for OnChecked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OnChecked").finish_non_exhaustive()
    }
}

/// Instance-owned storage for an uncontrolled switch.
///
/// `committed` is what resolution reads; `staged` holds the latest write until
/// the next [`StateCell::commit`].
#[derive(Debug, Default)]
pub struct StateCell {
    committed: Cell<Option<bool>>,
    staged: Cell<Option<bool>>,
}

impl StateCell {
    /// Create a cell seeded with an initial value (which may be unset).
    pub const fn new(initial: Option<bool>) -> Self {
        Self {
            committed: Cell::new(initial),
            staged: Cell::new(None),
        }
    }

    /// The committed value, `None` if never set.
    pub fn stored(&self) -> Option<bool> {
        self.committed.get()
    }

    /// The committed value, defaulting to `false`.
    pub fn current(&self) -> bool {
        self.stored().unwrap_or(false)
    }

    /// Stage a write. Visible after the next [`StateCell::commit`].
    pub fn set(&self, value: bool) {
        self.staged.set(Some(value));
    }

    /// Returns `true` if a write is waiting for the next commit.
    pub fn has_staged(&self) -> bool {
        self.staged.get().is_some()
    }

    /// Promote the staged write, if any.
    pub fn commit(&self) {
        if let Some(value) = self.staged.take() {
            self.committed.set(Some(value));
        }
    }
}

/// Where a change request goes.
#[derive(Clone, Debug)]
pub enum ChangeRequester {
    /// Internal setter of an uncontrolled switch.
    Internal(Rc<StateCell>),
    /// Caller callback of a controlled switch.
    External(OnChecked),
}

impl ChangeRequester {
    /// Request that the value become `next`.
    pub fn request(&self, next: bool) {
        match self {
            Self::Internal(cell) => cell.set(next),
            Self::External(cb) => cb.call(next),
        }
    }
}

/// Output of [`StateResolver::resolve`].
#[derive(Clone, Debug)]
pub struct Resolution {
    /// Current value for this cycle.
    pub value: bool,
    /// Where change requests go; `None` for a controlled switch without a callback.
    pub requester: Option<ChangeRequester>,
    /// Mode used for this cycle.
    pub mode: ControlMode,
}

/// Resolves the current value and change requester of one switch instance.
#[derive(Debug, Default)]
pub struct StateResolver {
    cell: Option<Rc<StateCell>>,
    established: Option<ControlMode>,
    last_controlled: bool,
    mismatch: Option<ModeMismatch>,
}

impl StateResolver {
    /// Create a resolver for a fresh instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode fixed by the first resolution, if any.
    pub fn mode(&self) -> Option<ControlMode> {
        self.established
    }

    /// The most recent mode change that was refused, if any.
    pub fn mode_mismatch(&self) -> Option<ModeMismatch> {
        self.mismatch
    }

    /// Resolve this cycle's value and requester.
    ///
    /// The internal cell is seeded from `default_checked` on the first call
    /// only; later `default_checked` values are ignored.
    pub fn resolve(
        &mut self,
        checked: Option<bool>,
        default_checked: Option<bool>,
        on_checked: Option<&OnChecked>,
    ) -> Resolution {
        let cell = self
            .cell
            .get_or_insert_with(|| Rc::new(StateCell::new(default_checked)))
            .clone();
        cell.commit();

        let requested = ControlMode::from_checked(checked);
        let mode = match self.established {
            None => {
                self.established = Some(requested);
                requested
            }
            Some(established) => {
                if established != requested {
                    let mismatch = ModeMismatch {
                        established,
                        requested,
                    };
                    tracing::warn!(
                        established = %established,
                        requested = %requested,
                        "switch changed control mode; keeping the established mode"
                    );
                    self.mismatch = Some(mismatch);
                }
                established
            }
        };

        match mode {
            ControlMode::Controlled => {
                if let Some(value) = checked {
                    self.last_controlled = value;
                }
                Resolution {
                    value: self.last_controlled,
                    requester: on_checked.cloned().map(ChangeRequester::External),
                    mode,
                }
            }
            ControlMode::Uncontrolled => Resolution {
                value: cell.current(),
                requester: Some(ChangeRequester::Internal(cell)),
                mode,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontrolled_defaults_to_false() {
        let mut r = StateResolver::new();
        let res = r.resolve(None, None, None);
        assert!(!res.value);
        assert_eq!(res.mode, ControlMode::Uncontrolled);
        assert!(matches!(res.requester, Some(ChangeRequester::Internal(_))));
    }

    #[test]
    fn default_checked_seeds_once() {
        let mut r = StateResolver::new();
        assert!(r.resolve(None, Some(true), None).value);
        // A later default is ignored.
        assert!(r.resolve(None, Some(false), None).value);
    }

    #[test]
    fn controlled_without_callback_has_no_requester() {
        let mut r = StateResolver::new();
        let res = r.resolve(Some(true), None, None);
        assert!(res.value);
        assert!(res.requester.is_none());
    }

    #[test]
    fn controlled_relays_to_callback() {
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        let cb = OnChecked::new(move |v| sink.set(Some(v)));

        let mut r = StateResolver::new();
        let res = r.resolve(Some(false), None, Some(&cb));
        res.requester.as_ref().unwrap().request(true);
        assert_eq!(seen.get(), Some(true));
        // The controlled value is untouched until the caller passes a new one.
        assert!(!r.resolve(Some(false), None, Some(&cb)).value);
    }

    #[test]
    fn staged_writes_commit_on_next_resolve() {
        let cell = StateCell::new(None);
        cell.set(true);
        assert!(cell.has_staged());
        assert_eq!(cell.stored(), None);
        cell.commit();
        assert!(!cell.has_staged());
        assert!(cell.current());
    }

    #[test]
    fn controlled_to_uncontrolled_keeps_controlled() {
        let mut r = StateResolver::new();
        let _ = r.resolve(Some(true), None, None);
        let res = r.resolve(None, Some(false), None);
        assert_eq!(res.mode, ControlMode::Controlled);
        assert!(res.value, "last controlled value is reused");
        assert_eq!(
            r.mode_mismatch(),
            Some(ModeMismatch {
                established: ControlMode::Controlled,
                requested: ControlMode::Uncontrolled,
            })
        );
    }

    #[test]
    fn uncontrolled_to_controlled_ignores_checked() {
        let mut r = StateResolver::new();
        let _ = r.resolve(None, None, None);
        let res = r.resolve(Some(true), None, None);
        assert_eq!(res.mode, ControlMode::Uncontrolled);
        assert!(!res.value);
        assert!(r.mode_mismatch().is_some());
    }

    #[test]
    fn mismatch_message() {
        let m = ModeMismatch {
            established: ControlMode::Uncontrolled,
            requested: ControlMode::Controlled,
        };
        assert_eq!(
            alloc::format!("{m}"),
            "switch changed from uncontrolled to controlled; staying uncontrolled"
        );
    }
}
