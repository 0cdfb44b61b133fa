//! Traversal for map containers (values only).

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::walk::{Category, Elements, Node, Walk};

// =============================================================================
// Map implementations (values only, keys unchanged)
// =============================================================================

impl<K, V, S> Walk for HashMap<K, V, S>
where
    K: Hash + Eq + 'static,
    V: Walk,
    S: BuildHasher + 'static,
{
    fn category() -> Category {
        Category::Mapping
    }

    fn node(&mut self) -> Node<'_> {
        Node::Mapping(Elements::new(self.values_mut()))
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<K, V> Walk for BTreeMap<K, V>
where
    K: Ord + 'static,
    V: Walk,
{
    fn category() -> Category {
        Category::Mapping
    }

    fn node(&mut self) -> Node<'_> {
        Node::Mapping(Elements::new(self.values_mut()))
    }

    fn reset(&mut self) {
        self.clear();
    }
}
