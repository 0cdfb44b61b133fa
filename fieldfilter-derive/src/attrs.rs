//! Parsing of `#[record(...)]` field attributes.
//!
//! This module maps attribute syntax to schema decisions and produces
//! structured errors for invalid forms.

use syn::{Attribute, LitStr, Result, spanned::Spanned};

/// What `#[record(...)]` says about one field.
///
/// | Attribute                     | Effect                                  |
/// |-------------------------------|-----------------------------------------|
/// | None                          | visible under its own name, untagged    |
/// | `#[record(acl = "a, b")]`     | credential tags, verbatim               |
/// | `#[record(rename = "Name")]`  | selector-facing name                    |
/// | `#[record(skip)]`             | invisible to policies and `reset`       |
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) acl: Option<LitStr>,
    pub(crate) rename: Option<LitStr>,
    pub(crate) skip: bool,
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("acl") {
                if options.acl.is_some() {
                    return Err(meta.error("duplicate `acl` in #[record(...)]"));
                }
                options.acl = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("rename") {
                if options.rename.is_some() {
                    return Err(meta.error("duplicate `rename` in #[record(...)]"));
                }
                let name: LitStr = meta.value()?.parse()?;
                if name.value().trim().is_empty() {
                    return Err(syn::Error::new(name.span(), "`rename` must not be empty"));
                }
                options.rename = Some(name);
                Ok(())
            } else if meta.path.is_ident("skip") {
                if options.skip {
                    return Err(meta.error("duplicate `skip` in #[record(...)]"));
                }
                options.skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown #[record(...)] option; expected `acl`, `rename` or `skip`"))
            }
        })?;
    }

    if options.skip && (options.acl.is_some() || options.rename.is_some()) {
        return Err(syn::Error::new(
            attrs
                .iter()
                .find(|attr| attr.path().is_ident("record"))
                .map_or_else(proc_macro2::Span::call_site, |attr| attr.span()),
            "`skip` cannot be combined with `acl` or `rename`",
        ));
    }

    Ok(options)
}
