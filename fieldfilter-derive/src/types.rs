//! Field and type helpers for the derive macro.

use syn::{Field, ext::IdentExt};

/// Checks if a type is `PhantomData<...>`, bare or path-qualified.
///
/// `PhantomData<T>` carries no data, so such fields are left out of the
/// record schema entirely.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|segment| {
        segment.ident == "PhantomData"
            && matches!(segment.arguments, syn::PathArguments::AngleBracketed(_))
    })
}

/// The name selectors see when no `rename` is given: the identifier without
/// any `r#` prefix, or the position for tuple fields.
pub(crate) fn default_field_name(field: &Field, index: usize) -> String {
    field
        .ident
        .as_ref()
        .map_or_else(|| index.to_string(), |ident| ident.unraw().to_string())
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::{DeriveInput, Fields};

    use super::*;

    fn parse_type(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    fn parse_fields(tokens: proc_macro2::TokenStream) -> Fields {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        match input.data {
            syn::Data::Struct(data) => data.fields,
            _ => unreachable!(),
        }
    }

    #[test]
    fn phantom_data_in_any_spelling() {
        for tokens in [
            quote! { PhantomData<T> },
            quote! { std::marker::PhantomData<T> },
            quote! { ::core::marker::PhantomData<fn() -> T> },
        ] {
            assert!(is_phantom_data(&parse_type(tokens)));
        }
    }

    #[test]
    fn other_types_are_not_phantom_data() {
        for tokens in [
            quote! { String },
            quote! { Option<PhantomData<T>> },
            quote! { PhantomData },
            quote! { &'static str },
        ] {
            assert!(!is_phantom_data(&parse_type(tokens)));
        }
    }

    #[test]
    fn named_fields_use_unraw_identifier() {
        let fields = parse_fields(quote! { struct S { r#type: u8, name: String } });
        let names: Vec<_> = fields
            .iter()
            .enumerate()
            .map(|(index, field)| default_field_name(field, index))
            .collect();
        assert_eq!(names, ["type", "name"]);
    }

    #[test]
    fn tuple_fields_use_position() {
        let fields = parse_fields(quote! { struct S(u8, String); });
        let names: Vec<_> = fields
            .iter()
            .enumerate()
            .map(|(index, field)| default_field_name(field, index))
            .collect();
        assert_eq!(names, ["0", "1"]);
    }
}
