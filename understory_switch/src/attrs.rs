// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered attribute bags with last-wins merging.
//!
//! ## Overview
//!
//! An [`AttributeBag`] is a small ordered map from attribute names to
//! [`AttrValue`]s. Bags are layered with [`AttributeBag::merge`]: later bags
//! override earlier ones key by key, and a key keeps the position of its first
//! insertion.
//!
//! [`AttrValue::Unset`] occupies a key without rendering. Overlaying an `Unset`
//! value therefore clears whatever an earlier bag put there, and
//! [`AttributeBag::rendered`] skips it.
//!
//! ```
//! use understory_switch::{AttrValue, AttributeBag};
//!
//! let base = AttributeBag::new().with("role", "switch").with("type", "button");
//! let rest = AttributeBag::new().with("role", "checkbox").with("id", "wifi");
//!
//! let merged = AttributeBag::merge([&base, &rest]);
//! let keys: Vec<_> = merged.keys().collect();
//! assert_eq!(keys, ["role", "type", "id"]);
//! assert_eq!(merged.get("role"), Some(&AttrValue::from("checkbox")));
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Flag;

/// Value of a single attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum AttrValue {
    /// The key is present but renders as absent.
    Unset,
    /// Boolean attribute.
    Bool(bool),
    /// String attribute.
    Str(Cow<'static, str>),
}

impl AttrValue {
    /// Returns `true` for [`AttrValue::Unset`].
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The boolean payload, if this is a [`AttrValue::Bool`].
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string payload, if this is a [`AttrValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Flag> for AttrValue {
    fn from(flag: Flag) -> Self {
        flag.get().map_or(Self::Unset, Self::Bool)
    }
}

impl From<&'static str> for AttrValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

/// An ordered map of attribute names to values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeBag {
    entries: Vec<(Cow<'static, str>, AttrValue)>,
}

impl AttributeBag {
    /// Create an empty bag.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of keys, including keys holding [`AttrValue::Unset`].
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the bag holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace `key`, returning the previous value.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder form of [`AttributeBag::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a key. `Unset` keys are returned as [`AttrValue::Unset`].
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the key is present, even when it holds [`AttrValue::Unset`].
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_ref())
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Entries that render, skipping [`AttrValue::Unset`].
    pub fn rendered(&self) -> impl Iterator<Item = (&str, &AttrValue)> + '_ {
        self.iter().filter(|(_, v)| !v.is_unset())
    }

    /// Overlay `other` onto `self`; keys in `other` win.
    pub fn overlay(&mut self, other: &Self) {
        for (k, v) in &other.entries {
            self.insert(k.clone(), v.clone());
        }
    }

    /// Merge bags in order; later bags override earlier ones.
    pub fn merge<'a>(bags: impl IntoIterator<Item = &'a Self>) -> Self {
        let mut out = Self::new();
        for bag in bags {
            out.overlay(bag);
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeBag
where
    K: Into<Cow<'static, str>>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (k, v) in iter {
            bag.insert(k, v);
        }
        bag
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AttributeBag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        for (k, v) in self.rendered() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
