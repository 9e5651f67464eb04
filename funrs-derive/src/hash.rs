//! Implementation of the `#[derive(StructuralHash)]` macro.
//!
//! Generates the structural hash fold: a seed derived from the concrete type
//! identity (type name, plus the variant tag for enums), combined with every
//! field value in declared order via `seed * 257 ^ hash(value)`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam, Generics, Ident,
    Variant,
};

/// Main implementation of the `StructuralHash` derive macro.
pub fn derive_structural_hash_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = with_hash_bounds(input.generics.clone());

    let body = match &input.data {
        Data::Enum(data_enum) => {
            let arms: Vec<TokenStream2> = data_enum
                .variants
                .iter()
                .map(|variant| variant_arm(variant))
                .collect();
            quote! {
                let type_seed =
                    ::funrs::structural::hash_identity(::core::any::type_name::<Self>());
                match self {
                    #(#arms)*
                }
            }
        }
        Data::Struct(data_struct) => struct_body(&data_struct.fields),
        Data::Union(_) => {
            let error = syn::Error::new_spanned(
                &input.ident,
                "StructuralHash cannot be derived for unions.",
            )
            .to_compile_error();
            return TokenStream::from(error);
        }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::funrs::structural::StructuralHash for #name #type_generics
            #where_clause
        {
            fn structural_hash(&self) -> u64 {
                #body
            }
        }

        impl #impl_generics ::core::hash::Hash for #name #type_generics #where_clause {
            fn hash<__StructuralHasher: ::core::hash::Hasher>(
                &self,
                state: &mut __StructuralHasher,
            ) {
                ::core::hash::Hasher::write_u64(
                    state,
                    ::funrs::structural::StructuralHash::structural_hash(self),
                );
            }
        }
    };

    TokenStream::from(expanded)
}

/// Adds a `StructuralHash` bound to every generic type parameter.
fn with_hash_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(parse_quote!(::funrs::structural::StructuralHash));
        }
    }
    generics
}

/// Folds a sequence of bound field values onto a seed expression.
fn fold_fields(seed: TokenStream2, bindings: &[TokenStream2]) -> TokenStream2 {
    bindings.iter().fold(seed, |accumulator, binding| {
        quote! {
            (#accumulator).wrapping_mul(257)
                ^ ::funrs::structural::StructuralHash::structural_hash(#binding)
        }
    })
}

/// Generates the hash arm for a single enum variant.
///
/// The variant's seed mixes the enum's type identity with the variant tag,
/// so distinct variants hash from distinct seeds.
fn variant_arm(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let tag = variant_name.to_string();
    let seed = quote! {
        type_seed.wrapping_mul(257) ^ ::funrs::structural::hash_identity(#tag)
    };

    match &variant.fields {
        Fields::Unit => quote! { Self::#variant_name => #seed, },
        Fields::Unnamed(fields) => {
            let bindings: Vec<Ident> = (0..fields.unnamed.len())
                .map(|index| format_ident!("value{}", index))
                .collect();
            let references: Vec<TokenStream2> =
                bindings.iter().map(|binding| quote! { #binding }).collect();
            let fold = fold_fields(quote! { (#seed) }, &references);
            quote! { Self::#variant_name(#(#bindings),*) => #fold, }
        }
        Fields::Named(fields) => {
            let bindings: Vec<&Ident> = fields
                .named
                .iter()
                .map(|field| field.ident.as_ref().expect("named field must have ident"))
                .collect();
            let references: Vec<TokenStream2> =
                bindings.iter().map(|binding| quote! { #binding }).collect();
            let fold = fold_fields(quote! { (#seed) }, &references);
            quote! { Self::#variant_name { #(#bindings),* } => #fold, }
        }
    }
}

/// Generates the hash body for a struct (record) type.
fn struct_body(fields: &Fields) -> TokenStream2 {
    let seed = quote! {
        ::funrs::structural::hash_identity(::core::any::type_name::<Self>())
    };

    let accessors: Vec<TokenStream2> = match fields {
        Fields::Unit => Vec::new(),
        Fields::Unnamed(fields) => (0..fields.unnamed.len())
            .map(|index| {
                let index = syn::Index::from(index);
                quote! { &self.#index }
            })
            .collect(),
        Fields::Named(fields) => fields
            .named
            .iter()
            .map(|field| {
                let name = field.ident.as_ref().expect("named field must have ident");
                quote! { &self.#name }
            })
            .collect(),
    };

    fold_fields(quote! { (#seed) }, &accessors)
}
