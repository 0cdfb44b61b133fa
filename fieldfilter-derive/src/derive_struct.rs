//! `Walk` and `Record` derivation for structs.
//!
//! Named, tuple and unit structs share one code path: every field becomes a
//! schema entry (unless skipped) and an arm of `field_mut`, in declaration
//! order, so schema index `i` and `field_mut(i)` always agree.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DataStruct, Member, Result, spanned::Spanned};

use crate::{
    attrs::parse_field_options,
    crate_path, crate_root,
    generics::add_record_bounds,
    types::{default_field_name, is_phantom_data},
};

/// One field that is visible to policies.
struct WalkedField {
    member: Member,
    ty: syn::Type,
    name: String,
    acl: Option<syn::LitStr>,
    span: Span,
}

pub(crate) fn derive_struct(
    ident: &Ident,
    data: DataStruct,
    generics: syn::Generics,
) -> Result<TokenStream> {
    let mut walked = Vec::new();
    for (index, field) in data.fields.into_iter().enumerate() {
        let options = parse_field_options(&field.attrs)?;
        if options.skip || is_phantom_data(&field.ty) {
            continue;
        }

        let span = field.span();
        let name = options
            .rename
            .as_ref()
            .map_or_else(|| default_field_name(&field, index), syn::LitStr::value);
        if let Some(existing) = walked.iter().find(|w: &&WalkedField| w.name == name) {
            return Err(syn::Error::new(
                span,
                format!(
                    "duplicate record field name `{name}` (also used by `{}`)",
                    member_label(&existing.member)
                ),
            ));
        }

        let member = field
            .ident
            .clone()
            .map_or_else(|| Member::Unnamed(index.into()), Member::Named);
        walked.push(WalkedField {
            member,
            ty: field.ty,
            name,
            acl: options.acl,
            span,
        });
    }

    let root = crate_root();
    let walk_path = crate_path("Walk");
    let record_path = crate_path("Record");

    let field_types: Vec<&syn::Type> = walked.iter().map(|field| &field.ty).collect();
    let generics = add_record_bounds(generics, &field_types);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let schema_fields = walked.iter().map(|field| {
        let WalkedField { ty, name, acl, span, .. } = field;
        let acl = acl.as_ref().map_or_else(
            || quote! { ::core::option::Option::None },
            |acl| quote! { ::core::option::Option::Some(#acl) },
        );
        quote_spanned! { *span =>
            #root::RawField::new(#name, <#ty as #walk_path>::category(), #acl)
        }
    });
    let resets = walked.iter().map(|field| {
        let WalkedField { member, span, .. } = field;
        quote_spanned! { *span =>
            #walk_path::reset(&mut self.#member);
        }
    });
    let field_arms = walked.iter().enumerate().map(|(index, field)| {
        let member = &field.member;
        quote! {
            #index => ::core::option::Option::Some(&mut self.#member),
        }
    });

    Ok(quote! {
        impl #impl_generics #walk_path for #ident #ty_generics #where_clause {
            fn category() -> #root::Category {
                #root::Category::Record
            }

            fn record_schema() -> ::core::option::Option<#root::RecordSchema> {
                ::core::option::Option::Some(#root::RecordSchema {
                    namespace: ::core::module_path!(),
                    name: ::core::stringify!(#ident),
                    fields: ::std::vec![#(#schema_fields),*],
                })
            }

            fn node(&mut self) -> #root::Node<'_> {
                #root::Node::Record(self)
            }

            fn reset(&mut self) {
                #(#resets)*
            }
        }

        impl #impl_generics #record_path for #ident #ty_generics #where_clause {
            fn descriptor(&self) -> ::std::sync::Arc<#root::TypeDescriptor> {
                #root::descriptor_of::<Self>()
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn #walk_path> {
                match index {
                    #(#field_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn as_walk_mut(&mut self) -> &mut dyn #walk_path {
                self
            }
        }
    })
}

fn member_label(member: &Member) -> String {
    match member {
        Member::Named(ident) => ident.to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    }
}
