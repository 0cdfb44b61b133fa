//! Generic parameter handling and trait bound management.
//!
//! `Walk` requires `'static`, so every type and lifetime parameter gets a
//! `'static` bound. Field types that mention a type parameter get their own
//! `FieldType: Walk` predicate, which lets `HashMap<K, V>` fields work without
//! forcing `K: Walk`.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` never mentions `T` as far as bounds go:
//!
//! ```ignore
//! #[derive(Record)]
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T only needs 'static
//! }
//! ```

use syn::{GenericArgument, PathArguments, Type, parse_quote};

use crate::crate_path;

/// Returns `true` if `ty` names one of the type parameters of `generics`.
///
/// Only the shapes a `Walk` type can take are inspected: paths with their
/// generic arguments, arrays, and parenthesized or macro-grouped types.
pub(crate) fn mentions_type_param(ty: &Type, generics: &syn::Generics) -> bool {
    match ty {
        Type::Path(type_path) => {
            if type_path
                .qself
                .as_ref()
                .is_some_and(|qself| mentions_type_param(&qself.ty, generics))
            {
                return true;
            }
            let segments = &type_path.path.segments;
            // PhantomData<T> walks as a leaf whatever T is.
            if segments.last().is_some_and(|last| last.ident == "PhantomData") {
                return false;
            }
            // `T` itself, or an associated type such as `T::Item`.
            if type_path.qself.is_none()
                && segments
                    .first()
                    .is_some_and(|first| generics.type_params().any(|param| param.ident == first.ident))
            {
                return true;
            }
            segments.iter().any(|segment| match &segment.arguments {
                PathArguments::AngleBracketed(args) => args.args.iter().any(|arg| match arg {
                    GenericArgument::Type(inner) => mentions_type_param(inner, generics),
                    GenericArgument::AssocType(assoc) => mentions_type_param(&assoc.ty, generics),
                    _ => false,
                }),
                _ => false,
            })
        }
        Type::Array(array) => mentions_type_param(&array.elem, generics),
        Type::Paren(paren) => mentions_type_param(&paren.elem, generics),
        Type::Group(group) => mentions_type_param(&group.elem, generics),
        _ => false,
    }
}

/// Adds `'static` to every parameter and `Walk` predicates for generic field types.
pub(crate) fn add_record_bounds(
    mut generics: syn::Generics,
    walked_types: &[&syn::Type],
) -> syn::Generics {
    let walk_path = crate_path("Walk");
    let generic_fields: Vec<&syn::Type> = walked_types
        .iter()
        .copied()
        .filter(|ty| mentions_type_param(ty, &generics))
        .collect();

    for param in generics.lifetimes_mut() {
        param.bounds.push(parse_quote!('static));
    }
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    if !generic_fields.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in generic_fields {
            where_clause.predicates.push(parse_quote!(#ty: #walk_path));
        }
    }
    generics
}
