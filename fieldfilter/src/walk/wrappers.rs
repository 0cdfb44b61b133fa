//! Wrapper types for values the engine should treat as leaves.

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use super::{Category, Node, Walk};

// =============================================================================
// Opaque - Foreign types as primitive leaves
// =============================================================================

/// Treats any `T: Default` as a primitive leaf.
///
/// Use this for foreign types that do not implement [`Walk`] but should still
/// be reset by policy. The wrapped value is never traversed; resetting it
/// assigns `T::default()`.
///
/// ```
/// use std::path::PathBuf;
///
/// use fieldfilter::{Opaque, Walk};
///
/// let mut path = Opaque::new(PathBuf::from("/etc/shadow"));
/// path.reset();
/// assert!(path.as_os_str().is_empty());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Opaque<T>(T);

impl<T> Opaque<T> {
    /// Wraps a value.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Opaque<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Opaque<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Opaque<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Opaque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Walk for Opaque<T>
where
    T: Default + 'static,
{
    fn category() -> Category {
        Category::Primitive
    }

    fn node(&mut self) -> Node<'_> {
        Node::Primitive
    }

    fn reset(&mut self) {
        self.0 = T::default();
    }
}
