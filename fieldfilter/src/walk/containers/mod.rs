//! `Walk` implementations for standard library types.
//!
//! ## Categories
//!
//! | Types                                   | Category    | Reset to                |
//! |-----------------------------------------|-------------|-------------------------|
//! | integers, floats, `bool`, `char`        | `Primitive` | `0`, `0.0`, `false`, `'\0'` |
//! | `String`, `Cow<'static, str>`           | `Primitive` | empty                   |
//! | `Option<T>`                             | `Pointer`   | `None`                  |
//! | `Box<T>`, `Box<dyn Record>`             | `Pointer`   | pointee reset           |
//! | `Vec<T>`, `VecDeque<T>`                 | `Sequence`  | empty                   |
//! | `[T; N]`                                | `Sequence`  | every element reset     |
//! | `HashMap<K, V>`, `BTreeMap<K, V>`       | `Mapping`   | empty                   |
//!
//! ## Map Keys Are Not Walked
//!
//! For map containers only **values** are exposed to the engine. Keys cannot
//! be mutated in place without rehashing, so they are never filtered.

mod maps;
mod passthrough;
mod pointers;
mod sequences;


// =============================================================================
// Leaf implementation helper
// =============================================================================

macro_rules! impl_walk_leaf {
    ($ty:ty) => {
        impl_walk_leaf!($ty, ::core::default::Default::default());
    };
    ($ty:ty, $zero:expr) => {
        impl crate::walk::Walk for $ty {
            fn category() -> crate::walk::Category {
                crate::walk::Category::Primitive
            }

            fn node(&mut self) -> crate::walk::Node<'_> {
                crate::walk::Node::Primitive
            }

            fn reset(&mut self) {
                *self = $zero;
            }
        }
    };
}

pub(super) use impl_walk_leaf;
