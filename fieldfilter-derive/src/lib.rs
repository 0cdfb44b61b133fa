//! Derive macro for `fieldfilter`.
//!
//! This crate generates the code behind `#[derive(Record)]`. It:
//! - reads `#[record(...)]` field attributes
//! - emits a static field schema and the `Walk`/`Record` implementations the
//!   policy engine traverses
//!
//! It does **not** decide which fields are reset. That happens at runtime in
//! the main `fieldfilter` crate.

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

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod attrs;
mod derive_struct;
mod generics;
mod types;
use derive_struct::derive_struct;

/// Derives `fieldfilter::Walk` and `fieldfilter::Record` for a struct.
///
/// Every field type must implement `Walk` unless the field is skipped.
///
/// # Field Attributes
///
/// - **No annotation**: the field is visible to all policies under its own
///   name (`"0"`, `"1"`, ... for tuple structs) and is never redacted.
///
/// - `#[record(acl = "admin, support")]`: comma-separated credential tags.
///   `redact` resets the field unless a granted credential matches one of
///   them. A `*` tag lets every caller through.
///
/// - `#[record(rename = "Age")]`: the name selectors match against.
///
/// - `#[record(skip)]`: the field is invisible to every policy and is left
///   alone by `reset`. Use this for foreign types that do not implement
///   `Walk`.
///
/// `PhantomData` fields are skipped automatically.
///
/// Enums and unions are rejected at compile time.
///
/// # Generics
///
/// Every type parameter gets a `'static` bound, and every field type that
/// mentions a type parameter gets a `Walk` bound in the `where` clause.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    if let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("record")) {
        return Err(syn::Error::new(
            attr.path().span(),
            "`#[record(...)]` is only supported on fields",
        ));
    }

    match data {
        Data::Struct(data) => derive_struct(&ident, data, generics),
        Data::Enum(data) => Err(syn::Error::new(
            data.enum_token.span(),
            "`Record` can only be derived for structs, not enums",
        )),
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span(),
            "`Record` can only be derived for structs, not unions",
        )),
    }
}

/// Returns the token stream to reference the fieldfilter crate root.
///
/// Handles crate renaming (e.g., `ff = { package = "fieldfilter", ... }`).
/// Inside `fieldfilter` itself this resolves through its
/// `extern crate self as fieldfilter` alias.
fn crate_root() -> TokenStream {
    match crate_name("fieldfilter") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::fieldfilter },
    }
}

/// Path to an item re-exported at the fieldfilter crate root.
fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item = format_ident!("{}", item);
    quote! { #root::#item }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_error(tokens: TokenStream) -> String {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        expand(input).unwrap_err().to_string()
    }

    #[test]
    fn enums_are_rejected() {
        let err = expand_error(quote! { enum Shape { Circle, Square } });
        assert!(err.contains("not enums"));
    }

    #[test]
    fn unions_are_rejected() {
        let err = expand_error(quote! { union Bits { int: u32, float: f32 } });
        assert!(err.contains("not unions"));
    }

    #[test]
    fn container_attributes_are_rejected() {
        let err = expand_error(quote! {
            #[record(acl = "admin")]
            struct Account { id: u64 }
        });
        assert!(err.contains("only supported on fields"));
    }

    #[test]
    fn plain_structs_expand() {
        let input: DeriveInput = syn::parse2(quote! { struct Account { id: u64 } }).unwrap();
        assert!(expand(input).is_ok());
    }
}
