//! Implementation of the `#[derive(StructuralDisplay)]` macro.
//!
//! Generates a `Display` impl following the structural render contract:
//! union variants render as `Tag` or `Tag(v1, v2, …)`, records render as
//! `Type { field = value, … }`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam, Generics, Ident,
    Variant,
};

/// Main implementation of the `StructuralDisplay` derive macro.
pub fn derive_structural_display_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = with_display_bounds(input.generics.clone());

    let body = match &input.data {
        Data::Enum(data_enum) => {
            let arms: Vec<TokenStream2> = data_enum
                .variants
                .iter()
                .map(|variant| variant_arm(variant))
                .collect();
            quote! {
                match self {
                    #(#arms)*
                }
            }
        }
        Data::Struct(data_struct) => struct_body(name, &data_struct.fields),
        Data::Union(_) => {
            let error = syn::Error::new_spanned(
                &input.ident,
                "StructuralDisplay cannot be derived for unions.",
            )
            .to_compile_error();
            return TokenStream::from(error);
        }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::core::fmt::Display for #name #type_generics #where_clause {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Adds a `Display` bound to every generic type parameter.
fn with_display_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(::core::fmt::Display));
        }
    }
    generics
}

/// Generates the render arm for a single enum variant.
///
/// A field-less variant renders as its bare tag; a variant with fields
/// renders as `Tag(v1, v2, …)` regardless of whether the fields are named.
fn variant_arm(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let tag = variant_name.to_string();

    match &variant.fields {
        Fields::Unit => quote! {
            Self::#variant_name => formatter.write_str(#tag),
        },
        Fields::Unnamed(fields) => {
            let bindings: Vec<Ident> = (0..fields.unnamed.len())
                .map(|index| format_ident!("value{}", index))
                .collect();
            let format_string = tagged_format_string(&tag, bindings.len());
            quote! {
                Self::#variant_name(#(#bindings),*) =>
                    ::core::write!(formatter, #format_string, #(#bindings),*),
            }
        }
        Fields::Named(fields) => {
            let bindings: Vec<&Ident> = fields
                .named
                .iter()
                .map(|field| field.ident.as_ref().expect("named field must have ident"))
                .collect();
            let format_string = tagged_format_string(&tag, bindings.len());
            quote! {
                Self::#variant_name { #(#bindings),* } =>
                    ::core::write!(formatter, #format_string, #(#bindings),*),
            }
        }
    }
}

/// Generates the render body for a struct (record) type.
fn struct_body(name: &Ident, fields: &Fields) -> TokenStream2 {
    let type_name = name.to_string();

    match fields {
        Fields::Unit => quote! { formatter.write_str(#type_name) },
        Fields::Unnamed(fields) if fields.unnamed.is_empty() => {
            quote! { formatter.write_str(#type_name) }
        }
        Fields::Named(fields) if fields.named.is_empty() => {
            quote! { formatter.write_str(#type_name) }
        }
        Fields::Unnamed(fields) => {
            let indices: Vec<syn::Index> =
                (0..fields.unnamed.len()).map(syn::Index::from).collect();
            let format_string = tagged_format_string(&type_name, indices.len());
            quote! { ::core::write!(formatter, #format_string, #(self.#indices),*) }
        }
        Fields::Named(fields) => {
            let names: Vec<&Ident> = fields
                .named
                .iter()
                .map(|field| field.ident.as_ref().expect("named field must have ident"))
                .collect();
            let pieces: Vec<String> = names
                .iter()
                .map(|field_name| format!("{field_name} = {{}}"))
                .collect();
            let format_string = format!("{} {{{{ {} }}}}", type_name, pieces.join(", "));
            quote! { ::core::write!(formatter, #format_string, #(self.#names),*) }
        }
    }
}

/// Builds the `Tag({}, {}, …)` format string for `count` values.
fn tagged_format_string(tag: &str, count: usize) -> String {
    let placeholders = vec!["{}"; count].join(", ");
    format!("{tag}({placeholders})")
}
