//! Implementation of the `#[derive(UnionType)]` macro.
//!
//! Generates the closed-union tag accessor for an enum: each variant reports
//! its declared name as a `&'static str`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Generics, Ident, Variant};

/// Main implementation of the `UnionType` derive macro.
pub fn derive_union_type_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_tag_impl(name, generics, &data_enum.variants.iter().collect::<Vec<_>>())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "UnionType can only be derived for enums — a struct is a record, not a closed union.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "UnionType cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates the `UnionType` impl with one match arm per variant.
fn generate_tag_impl(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let arms: Vec<TokenStream2> = variants.iter().map(|variant| tag_arm(variant)).collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::funrs::union::UnionType for #name #type_generics #where_clause {
            #[inline]
            fn tag(&self) -> &'static str {
                match self {
                    #(#arms)*
                }
            }
        }
    }
}

/// Generates a single `variant => "Tag"` match arm.
fn tag_arm(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let tag = variant_name.to_string();

    match &variant.fields {
        Fields::Unit => quote! { Self::#variant_name => #tag, },
        Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #tag, },
        Fields::Named(_) => quote! { Self::#variant_name { .. } => #tag, },
    }
}
