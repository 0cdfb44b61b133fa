//! Traversal traits and the closed node model.
//!
//! This module provides the machinery the policy engine walks over:
//!
//! - **`Category`**: the structural kind of a value (primitive, record, pointer,
//!   sequence, mapping)
//! - **`Walk`**: implemented by every type that can appear in a filtered graph
//! - **`Record`**: implemented by `#[derive(Record)]` structs; exposes fields by index
//! - **`Node`**: what a value looks like to the walker, one variant per category
//! - **`containers`**: `Walk` implementations for std types
//! - **`wrappers`**: `Opaque<T>` for foreign leaf types

mod containers;
mod wrappers;

use std::{fmt, sync::Arc};

pub use wrappers::Opaque;

use crate::descriptor::{RecordSchema, TypeDescriptor};

// =============================================================================
// Category - Structural kind of a value
// =============================================================================

/// The structural kind of a value, as seen by the policy engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Scalars, strings and opaque leaves. Never traversed.
    Primitive,
    /// A struct deriving `Record`.
    Record,
    /// A (possibly null) indirection: `Option<T>`, `Box<T>`, `Box<dyn Record>`.
    Pointer,
    /// An ordered sequence: `Vec<T>`, `VecDeque<T>`, `[T; N]`.
    Sequence,
    /// A key-value mapping. Only values are walked.
    Mapping,
}

impl Category {
    /// Returns `true` if the engine descends into values of this category.
    pub fn is_traversable(self) -> bool {
        !matches!(self, Self::Primitive)
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Record => "record",
            Self::Pointer => "pointer",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Walk - Types that can appear in a filtered object graph
// =============================================================================

/// A type that participates in policy traversal.
///
/// Implemented for scalars, strings, `Option`, `Box`, sequences and maps in
/// this crate, and for user structs through `#[derive(Record)]`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Walk`",
    label = "this type cannot be walked by the policy engine",
    note = "use `#[derive(Record)]` on the type definition",
    note = "or mark the field `#[record(skip)]`, or wrap it in `fieldfilter::Opaque<T>`"
)]
pub trait Walk: 'static {
    /// The structural category of this type.
    fn category() -> Category
    where
        Self: Sized;

    /// The raw record schema, if this type is a record.
    fn record_schema() -> Option<RecordSchema>
    where
        Self: Sized,
    {
        None
    }

    /// Borrows this value as a traversal node.
    fn node(&mut self) -> Node<'_>;

    /// Assigns the zero value for this type in place.
    fn reset(&mut self);

    /// Fully qualified type name, used in error messages and logs.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// =============================================================================
// Record - Structs with described fields
// =============================================================================

/// A struct whose fields are described by a [`TypeDescriptor`].
///
/// Generated by `#[derive(Record)]`. Field indices follow descriptor order.
pub trait Record: Walk {
    /// Returns the cached descriptor for this record type.
    fn descriptor(&self) -> Arc<TypeDescriptor>;

    /// Borrows the field at `index`, or `None` if there is no such field.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Walk>;

    /// Borrows this record as a plain [`Walk`] value.
    fn as_walk_mut(&mut self) -> &mut dyn Walk;
}

// =============================================================================
// Node - Closed view of a value's shape
// =============================================================================

/// A value's shape, borrowed for traversal.
pub enum Node<'a> {
    /// Nothing to walk.
    Primitive,
    /// A record whose fields can be inspected.
    Record(&'a mut dyn Record),
    /// An indirection. `None` is a null pointer.
    Pointer(Option<&'a mut dyn Walk>),
    /// Sequence elements, in order.
    Sequence(Elements<'a>),
    /// Mapping values. Keys are never walked.
    Mapping(Elements<'a>),
}

impl Node<'_> {
    /// The category this node belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Primitive => Category::Primitive,
            Self::Record(_) => Category::Record,
            Self::Pointer(_) => Category::Pointer,
            Self::Sequence(_) => Category::Sequence,
            Self::Mapping(_) => Category::Mapping,
        }
    }
}

/// Mutable iterator over the children of a sequence or mapping.
///
/// Carries the static category of the element type so callers can reject a
/// container by shape before visiting any element.
pub struct Elements<'a> {
    category: Category,
    inner: Box<dyn Iterator<Item = &'a mut dyn Walk> + 'a>,
}

impl<'a> Elements<'a> {
    /// Wraps an iterator of mutable element references.
    pub fn new<T, I>(iter: I) -> Self
    where
        T: Walk,
        I: Iterator<Item = &'a mut T> + 'a,
    {
        Self {
            category: T::category(),
            inner: Box::new(iter.map(|value| value as &mut dyn Walk)),
        }
    }

    /// Category of the element (or mapping value) type.
    pub fn category(&self) -> Category {
        self.category
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a mut dyn Walk;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
