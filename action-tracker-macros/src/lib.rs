//! Procedural macros for action-tracker

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(ActionKey)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(key), supports(enum_unit))]
struct KeyOpts {
    ident: syn::Ident,
    data: darling::ast::Data<KeyVariant, ()>,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(key))]
struct KeyVariant {
    ident: syn::Ident,

    /// Explicit label override
    #[darling(default)]
    label: Option<String>,
}

/// Derive macro for the ActionKey trait
///
/// Generates `label()` returning the variant name as a static string,
/// `all()` enumerating every key, and `from_label()` for the reverse lookup.
/// Only unit-variant enums are accepted: keys are a fixed enumeration, never
/// constructed dynamically.
///
/// Use `#[key(label = "...")]` on a variant to override the derived label.
///
/// # Example
/// ```ignore
/// #[derive(ActionKey, Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum FetchKey {
///     FetchFollowers,
///     #[key(label = "FetchFollowing")]
///     Following,
/// }
///
/// assert_eq!(FetchKey::FetchFollowers.label(), "FetchFollowers");
/// assert_eq!(FetchKey::all().len(), 2);
/// assert_eq!(FetchKey::from_label("FetchFollowing"), Some(FetchKey::Following));
/// ```
#[proc_macro_derive(ActionKey, attributes(key))]
pub fn derive_action_key(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match KeyOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(
                &input,
                "ActionKey can only be derived for enums with unit variants",
            )
            .to_compile_error()
            .into();
        }
    };

    let variant_idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let variant_labels: Vec<String> = variants
        .iter()
        .map(|v| v.label.clone().unwrap_or_else(|| v.ident.to_string()))
        .collect();

    let label_arms = variant_idents
        .iter()
        .zip(variant_labels.iter())
        .map(|(v, label)| {
            quote! { #name::#v => #label }
        });

    let from_label_arms = variant_idents
        .iter()
        .zip(variant_labels.iter())
        .map(|(v, label)| {
            quote! { #label => ::core::option::Option::Some(#name::#v) }
        });

    let all_variants = variant_idents.iter().map(|v| quote! { #name::#v });

    let expanded = quote! {
        impl action_tracker::ActionKey for #name {
            fn label(&self) -> &'static str {
                match self {
                    #(#label_arms),*
                }
            }

            fn all() -> &'static [Self] {
                static ALL: &[#name] = &[#(#all_variants),*];
                ALL
            }

            fn from_label(label: &str) -> ::core::option::Option<Self> {
                match label {
                    #(#from_label_arms,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    TokenStream::from(expanded)
}
