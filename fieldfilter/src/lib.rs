//! Field-level access control for in-memory object graphs.
//!
//! Three policies walk a value in place and reset the fields they reject to
//! their zero value:
//!
//! - [`redact`]: fields tagged with credential labels survive only for callers
//!   holding a matching credential
//! - [`retain`]: keep only the fields named by a selector tree
//! - [`clear`]: reset the fields named by a selector tree
//!
//! Selector trees come from a small text language (`id,account(username)`),
//! see [`parse`].
//!
//! ```
//! use fieldfilter::{Record, redact, retain, Selection};
//!
//! #[derive(Record, Default, Debug, PartialEq)]
//! struct User {
//!     id: u64,
//!     #[record(acl = "admin, support")]
//!     email: String,
//!     #[record(acl = "admin")]
//!     password_hash: String,
//!     manager: Option<Box<User>>,
//! }
//!
//! let mut user = User {
//!     id: 7,
//!     email: "ada@example.com".into(),
//!     password_hash: "x1".into(),
//!     manager: Some(Box::new(User { id: 1, password_hash: "x0".into(), ..User::default() })),
//! };
//!
//! redact(&mut user, &["support"]).unwrap();
//! assert_eq!(user.email, "ada@example.com");
//! assert!(user.password_hash.is_empty());
//! assert!(user.manager.as_ref().unwrap().password_hash.is_empty());
//!
//! let selection: Selection = "id".parse().unwrap();
//! retain(&mut user, &selection).unwrap();
//! assert_eq!(user, User { id: 7, ..User::default() });
//! ```
//!
//! What this crate does:
//! - describes record types once per process (field names, categories, tags)
//! - resets rejected fields to the zero value of their type
//! - descends through `Option`, `Box`, sequences, maps and nested records
//!
//! What it does not do:
//! - serialize or copy values; filtering is always in place
//! - enforce who may hold which credential
//!
//! The `Record` derive macro lives in `fieldfilter-derive` and is re-exported
//! from this crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use fieldfilter_derive::Record;

#[allow(unused_extern_crates)]
extern crate self as fieldfilter;

// Module declarations
mod descriptor;
mod engine;
mod error;
mod reset;
mod selector;
mod walk;

// Re-exports from descriptor module
pub use descriptor::{
    FieldDescriptor, RawField, RecordSchema, TypeCache, TypeDescriptor, TypeKey, WILDCARD,
    descriptor_of, descriptor_of_val,
};
// Re-exports from engine module
pub use engine::{
    DEFAULT_MAX_DEPTH, ErrorMode, Filter, FilterOptions, Filterable, clear, redact, retain,
};
// Re-exports from error module
pub use error::{Error, Result};
// Re-exports from reset module
pub use reset::reset_to_default;
// Re-exports from selector module
pub use selector::{FieldSelector, MAX_NESTING, Selection, parse};
// Re-exports from walk module
pub use walk::{Category, Elements, Node, Opaque, Record, Walk};
