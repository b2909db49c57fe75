// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tri-state boolean inputs.
//!
//! Props such as `disabled` or `read_only` are optional: a caller may leave them
//! out entirely, which is different from passing `false`. [`Flag`] keeps that
//! distinction alive through precedence chains like `is_disabled ?? disabled`:
//!
//! ```
//! use understory_switch::Flag;
//!
//! // An explicit `false` override wins over a generic `true`.
//! assert_eq!(Flag::False.or(Flag::True), Flag::False);
//! // Only `Unset` falls through.
//! assert_eq!(Flag::Unset.or(Flag::True), Flag::True);
//! ```

/// An optional boolean where "not specified" is its own state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<bool>", into = "Option<bool>")
)]
pub enum Flag {
    /// Not specified by the caller.
    #[default]
    Unset,
    /// Explicitly `false`.
    False,
    /// Explicitly `true`.
    True,
}

impl Flag {
    /// Returns `self` unless it is [`Flag::Unset`], in which case `fallback` is returned.
    #[inline]
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        match self {
            Self::Unset => fallback,
            set => set,
        }
    }

    /// Returns `true` only for [`Flag::True`].
    #[inline]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Returns `true` unless the flag is [`Flag::Unset`].
    #[inline]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// The flag as an `Option<bool>`.
    #[inline]
    pub const fn get(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::False => Some(false),
            Self::True => Some(true),
        }
    }
}

impl From<bool> for Flag {
    #[inline]
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for Flag {
    #[inline]
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

impl From<Flag> for Option<bool> {
    #[inline]
    fn from(flag: Flag) -> Self {
        flag.get()
    }
}
