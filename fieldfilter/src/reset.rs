//! Default-value resolution for fields that fail a policy.
//!
//! Every [`Walk`] type knows its own zero value (`Walk::reset`); this module is
//! the single place the engine goes through to apply it, so an absent field
//! reference is handled uniformly.

use crate::walk::{Record, Walk};

/// Resets a field to the zero value of its category.
///
/// `None` stands for a field reference that does not resolve (an index past
/// the end of the record, or a field hidden from policies); it is ignored.
pub fn reset_to_default(field: Option<&mut dyn Walk>) {
    if let Some(field) = field {
        field.reset();
    }
}

/// Resets the field at `index` of `record`.
pub(crate) fn reset_field(record: &mut dyn Record, index: usize) {
    reset_to_default(record.field_mut(index));
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap, VecDeque};

    use super::*;

    fn reset<T: Walk>(mut value: T) -> T {
        reset_to_default(Some(&mut value));
        value
    }

    #[test]
    fn numbers_reset_to_zero() {
        assert_eq!(reset(42i32), 0);
        assert_eq!(reset(7u64), 0);
        assert_eq!(reset(-3i128), 0);
        assert!(reset(3.5f64).abs() < f64::EPSILON);
        assert!(reset(1.25f32).abs() < f32::EPSILON);
    }

    #[test]
    fn text_and_flags_reset_to_empty() {
        assert_eq!(reset(String::from("secret")), "");
        assert!(!reset(true));
        assert_eq!(reset('x'), '\0');
    }

    #[test]
    fn pointers_reset_to_none() {
        assert_eq!(reset(Some(5u8)), None);
        assert_eq!(reset(Some(String::from("x"))), None);
        assert_eq!(*reset(Box::new(9u16)), 0);
    }

    #[test]
    fn collections_reset_to_empty() {
        assert!(reset(vec![1, 2, 3]).is_empty());
        assert!(reset(VecDeque::from([1u8])).is_empty());
        assert!(reset(HashMap::from([("a", 1)])).is_empty());
        assert!(reset(BTreeMap::from([(1, true)])).is_empty());
        assert_eq!(reset([1u8, 2, 3]), [0, 0, 0]);
    }

    #[test]
    fn absent_field_is_ignored() {
        reset_to_default(None);
    }
}
