//! Traversal for pointer-like containers.

use crate::walk::{Category, Node, Record, Walk};

// =============================================================================
// Option<T> - nullable pointer
// =============================================================================

impl<T> Walk for Option<T>
where
    T: Walk,
{
    fn category() -> Category {
        Category::Pointer
    }

    fn node(&mut self) -> Node<'_> {
        Node::Pointer(self.as_mut().map(|value| value as &mut dyn Walk))
    }

    fn reset(&mut self) {
        *self = None;
    }
}

// =============================================================================
// Box<T> - non-null pointer
// =============================================================================

impl<T> Walk for Box<T>
where
    T: Walk,
{
    fn category() -> Category {
        Category::Pointer
    }

    fn node(&mut self) -> Node<'_> {
        Node::Pointer(Some(&mut **self as &mut dyn Walk))
    }

    fn reset(&mut self) {
        // A box has no null state; its zero value is a zeroed pointee.
        (**self).reset();
    }
}

// =============================================================================
// Box<dyn Record> - pointer to a record of any type
// =============================================================================

impl Walk for Box<dyn Record> {
    fn category() -> Category {
        Category::Pointer
    }

    fn node(&mut self) -> Node<'_> {
        Node::Pointer(Some((**self).as_walk_mut()))
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
