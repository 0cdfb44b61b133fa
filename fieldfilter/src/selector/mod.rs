//! Field selector trees and their textual form.
//!
//! A [`Selection`] scopes the allow-list (`retain`) and deny-list (`clear`)
//! policies. It is usually parsed from text:
//!
//! ```
//! use fieldfilter::Selection;
//!
//! let selection: Selection = "id,account(username,parent(id))".parse().unwrap();
//! assert_eq!(selection.len(), 2);
//! assert_eq!(selection[1].children()[1].name(), "parent");
//! assert_eq!(selection.to_string(), "id,account(username,parent(id))");
//! ```
//!
//! With the `serde` feature, selections also (de)serialize as
//! `[{"name": "account", "fields": [{"name": "username"}]}]`.

mod parse;

use std::{fmt, ops::Deref, str::FromStr};

pub use parse::{MAX_NESTING, parse};

use crate::{descriptor::WILDCARD, error::Error};

// =============================================================================
// FieldSelector
// =============================================================================

/// One node of a selector tree: a field name (or `*`) and optional children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSelector {
    name: String,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "fields", default, skip_serializing_if = "Vec::is_empty")
    )]
    children: Vec<FieldSelector>,
}

impl FieldSelector {
    /// A leaf selector.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// A selector with nested children.
    pub fn with_children(
        name: impl Into<String>,
        children: impl IntoIterator<Item = FieldSelector>,
    ) -> Self {
        Self {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    /// The `*` selector, which matches every field at its level.
    pub fn wildcard() -> Self {
        Self::new(WILDCARD)
    }

    /// The selected field name, or `*`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nested selectors, in order.
    pub fn children(&self) -> &[FieldSelector] {
        &self.children
    }

    /// Returns `true` if this selector has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this is the `*` selector.
    pub fn is_wildcard(&self) -> bool {
        self.name == WILDCARD
    }

    /// Exact-name or wildcard match.
    pub(crate) fn matches(&self, field: &str) -> bool {
        self.is_wildcard() || self.name == field
    }

    /// Case-insensitive or wildcard match.
    pub(crate) fn matches_ignore_case(&self, field: &str) -> bool {
        self.is_wildcard() || eq_fold(&self.name, field)
    }
}

/// Unicode case-insensitive comparison without allocating.
pub(crate) fn eq_fold(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.children.is_empty() {
            f.write_str("(")?;
            write_list(f, &self.children)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, selectors: &[FieldSelector]) -> fmt::Result {
    for (index, selector) in selectors.iter().enumerate() {
        if index > 0 {
            f.write_str(",")?;
        }
        fmt::Display::fmt(selector, f)?;
    }
    Ok(())
}

// =============================================================================
// Selection
// =============================================================================

/// The top level of a selector tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Selection(Vec<FieldSelector>);

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for Selection {
    type Target = [FieldSelector];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[FieldSelector]> for Selection {
    fn as_ref(&self) -> &[FieldSelector] {
        &self.0
    }
}

impl From<Vec<FieldSelector>> for Selection {
    fn from(selectors: Vec<FieldSelector>) -> Self {
        Self(selectors)
    }
}

impl FromIterator<FieldSelector> for Selection {
    fn from_iter<I: IntoIterator<Item = FieldSelector>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Selection {
    type Item = FieldSelector;
    type IntoIter = std::vec::IntoIter<FieldSelector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a FieldSelector;
    type IntoIter = std::slice::Iter<'a, FieldSelector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0)
    }
}
