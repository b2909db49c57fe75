// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute projection: from switch state to ARIA and data attributes.
//!
//! ## Layers
//!
//! The final bag is merged in a fixed order, later layers winning:
//!
//! 1. Base attributes for the element kind ([`BaseAttributes`]).
//! 2. Derived switch attributes ([`SwitchAttributes`]).
//! 3. Caller passthrough attributes.
//!
//! ## Which flag feeds which attribute
//!
//! | Attribute        | Source                          |
//! |------------------|---------------------------------|
//! | `aria-disabled`  | raw `disabled` prop             |
//! | native `disabled`| raw `is_disabled` prop          |
//! | `data-disabled`  | effective `is_disabled ?? disabled` |
//!
//! The ARIA attribute reflects what the author wrote while `data-disabled`
//! reflects the effective state used for gating.

use alloc::borrow::Cow;

use crate::gate::effective_disabled;
use crate::{AttrValue, AttributeBag, Flag};

/// ARIA role emitted for every switch root.
pub const ROLE: &str = "switch";

/// Native `type` emitted for button-like elements.
pub const NATIVE_TYPE: &str = "button";

/// Semantic element kind a switch root renders as.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementType {
    /// `<button>`.
    #[default]
    Button,
    /// `<input>`.
    Input,
    /// Any other element, by tag name.
    Other(Cow<'static, str>),
}

impl ElementType {
    /// Classify a tag name. Unrecognized tags become [`ElementType::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "button" => Self::Button,
            "input" => Self::Input,
            other => Self::Other(Cow::Owned(other.into())),
        }
    }

    /// Tag name of this element kind.
    pub fn tag(&self) -> &str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Other(tag) => tag.as_ref(),
        }
    }

    /// Whether the element carries native disabled semantics.
    pub const fn is_native_control(&self) -> bool {
        matches!(self, Self::Button | Self::Input)
    }
}

/// Rendered value of `data-state`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DataState {
    /// `"checked"`.
    Checked,
    /// `"unchecked"`.
    Unchecked,
}

impl DataState {
    /// State for a checked value.
    pub const fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }

    /// Attribute text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Unchecked => "unchecked",
        }
    }
}

impl From<DataState> for AttrValue {
    fn from(state: DataState) -> Self {
        Self::from(state.as_str())
    }
}

/// Base attributes, one variant per element kind.
///
/// Each variant carries only the fields that are valid for that kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BaseAttributes {
    /// Button-like elements: `role`, `type="button"`, and native `disabled`.
    Native {
        /// Native `disabled`, taken from the raw `is_disabled` prop.
        disabled: Flag,
    },
    /// Everything else: `role` only.
    Generic,
}

impl BaseAttributes {
    /// Pick the variant for `element_type`.
    pub const fn for_element(element_type: &ElementType, is_disabled: Flag) -> Self {
        if element_type.is_native_control() {
            Self::Native {
                disabled: is_disabled,
            }
        } else {
            Self::Generic
        }
    }

    /// Flatten into a bag.
    pub fn to_bag(&self) -> AttributeBag {
        let bag = AttributeBag::new().with("role", ROLE);
        match *self {
            Self::Native { disabled } => bag.with("type", NATIVE_TYPE).with("disabled", disabled),
            Self::Generic => bag,
        }
    }
}

/// The derived accessibility and data attribute set of a switch root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwitchAttributes {
    /// `aria-checked`.
    pub aria_checked: bool,
    /// `aria-readonly`.
    pub aria_readonly: Flag,
    /// `aria-required`.
    pub aria_required: Flag,
    /// `aria-disabled`, from the raw `disabled` prop.
    pub aria_disabled: Flag,
    /// `data-disabled`, from the effective disabled flag.
    pub data_disabled: Flag,
    /// `data-state`.
    pub data_state: DataState,
}

impl SwitchAttributes {
    /// Derive the attribute set.
    pub const fn new(
        checked: bool,
        disabled: Flag,
        is_disabled: Flag,
        required: Flag,
        read_only: Flag,
    ) -> Self {
        Self {
            aria_checked: checked,
            aria_readonly: read_only,
            aria_required: required,
            aria_disabled: disabled,
            data_disabled: effective_disabled(is_disabled, disabled),
            data_state: DataState::from_checked(checked),
        }
    }

    /// Flatten into a bag, in a stable key order.
    pub fn to_bag(&self) -> AttributeBag {
        AttributeBag::new()
            .with("aria-checked", self.aria_checked)
            .with("aria-readonly", self.aria_readonly)
            .with("aria-required", self.aria_required)
            .with("aria-disabled", self.aria_disabled)
            .with("data-disabled", self.data_disabled)
            .with("data-state", self.data_state)
    }
}

/// Project the full attribute bag of a switch root.
///
/// Merge order is base, then derived, then `rest`.
pub fn project(
    checked: bool,
    disabled: Flag,
    is_disabled: Flag,
    required: Flag,
    read_only: Flag,
    element_type: &ElementType,
    rest: &AttributeBag,
) -> AttributeBag {
    let base = BaseAttributes::for_element(element_type, is_disabled).to_bag();
    let derived =
        SwitchAttributes::new(checked, disabled, is_disabled, required, read_only).to_bag();
    AttributeBag::merge([&base, &derived, rest])
}
