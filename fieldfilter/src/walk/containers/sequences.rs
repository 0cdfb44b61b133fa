//! Traversal for ordered sequences.

use std::collections::VecDeque;

use crate::walk::{Category, Elements, Node, Walk};

impl<T> Walk for Vec<T>
where
    T: Walk,
{
    fn category() -> Category {
        Category::Sequence
    }

    fn node(&mut self) -> Node<'_> {
        Node::Sequence(Elements::new(self.iter_mut()))
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T> Walk for VecDeque<T>
where
    T: Walk,
{
    fn category() -> Category {
        Category::Sequence
    }

    fn node(&mut self) -> Node<'_> {
        Node::Sequence(Elements::new(self.iter_mut()))
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Walk for [T; N]
where
    T: Walk,
{
    fn category() -> Category {
        Category::Sequence
    }

    fn node(&mut self) -> Node<'_> {
        Node::Sequence(Elements::new(self.iter_mut()))
    }

    fn reset(&mut self) {
        // Fixed-size arrays cannot shrink; zero every slot instead.
        for value in self.iter_mut() {
            value.reset();
        }
    }
}
