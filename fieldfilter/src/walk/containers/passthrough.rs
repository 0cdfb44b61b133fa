//! Leaf `Walk` implementations for scalar-like types.

use std::{borrow::Cow, marker::PhantomData, time::Duration};

use super::impl_walk_leaf;
use crate::walk::{Category, Node, Walk};

// =============================================================================
// Scalars and strings
// =============================================================================

impl_walk_leaf!(bool, false);
impl_walk_leaf!(char, '\0');

// Signed integers
impl_walk_leaf!(i8, 0);
impl_walk_leaf!(i16, 0);
impl_walk_leaf!(i32, 0);
impl_walk_leaf!(i64, 0);
impl_walk_leaf!(i128, 0);
impl_walk_leaf!(isize, 0);

// Unsigned integers
impl_walk_leaf!(u8, 0);
impl_walk_leaf!(u16, 0);
impl_walk_leaf!(u32, 0);
impl_walk_leaf!(u64, 0);
impl_walk_leaf!(u128, 0);
impl_walk_leaf!(usize, 0);

// Floating point
impl_walk_leaf!(f32, 0.0);
impl_walk_leaf!(f64, 0.0);

impl_walk_leaf!(Duration, Duration::ZERO);
impl_walk_leaf!(Cow<'static, str>, Cow::Borrowed(""));

impl Walk for String {
    fn category() -> Category {
        Category::Primitive
    }

    fn node(&mut self) -> Node<'_> {
        Node::Primitive
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl Walk for () {
    fn category() -> Category {
        Category::Primitive
    }

    fn node(&mut self) -> Node<'_> {
        Node::Primitive
    }

    fn reset(&mut self) {}
}

impl<T: 'static> Walk for PhantomData<T> {
    fn category() -> Category {
        Category::Primitive
    }

    fn node(&mut self) -> Node<'_> {
        Node::Primitive
    }

    fn reset(&mut self) {}
}

// =============================================================================
// Date/time leaves (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_leaves {
    use chrono::{
        DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc,
    };

    use super::impl_walk_leaf;

    impl_walk_leaf!(DateTime<Utc>);
    impl_walk_leaf!(DateTime<Local>);
    impl_walk_leaf!(DateTime<FixedOffset>);
    impl_walk_leaf!(NaiveDateTime);
    impl_walk_leaf!(NaiveDate);
    impl_walk_leaf!(NaiveTime);
    impl_walk_leaf!(TimeDelta, TimeDelta::zero());
}

#[cfg(feature = "time")]
mod time_leaves {
    use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

    use super::impl_walk_leaf;

    // `time` types have no `Default`; the Unix epoch stands in for zero.
    impl_walk_leaf!(OffsetDateTime, OffsetDateTime::UNIX_EPOCH);
    impl_walk_leaf!(
        PrimitiveDateTime,
        PrimitiveDateTime::new(OffsetDateTime::UNIX_EPOCH.date(), Time::MIDNIGHT)
    );
    impl_walk_leaf!(Date, OffsetDateTime::UNIX_EPOCH.date());
    impl_walk_leaf!(Time, Time::MIDNIGHT);
    impl_walk_leaf!(time::Duration, time::Duration::ZERO);
    impl_walk_leaf!(UtcOffset, UtcOffset::UTC);
}

#[cfg(feature = "uuid")]
mod uuid_leaves {
    use uuid::Uuid;

    use super::impl_walk_leaf;

    impl_walk_leaf!(Uuid, Uuid::nil());
}
