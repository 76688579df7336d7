use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// Expand `#[derive(Signal)]` for a fieldless enum.
pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "`Signal` can only be derived for enums",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Signal` enums cannot be generic",
        ));
    }

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "`Signal` enums need at least one variant",
        ));
    }

    if let Some(variant) = data
        .variants
        .iter()
        .find(|v| !matches!(v.fields, Fields::Unit))
    {
        return Err(syn::Error::new_spanned(
            variant,
            "`Signal` variants cannot carry data; use a `Message` type for payloads",
        ));
    }

    let idents: Vec<_> = data.variants.iter().map(|v| &v.ident).collect();

    // Wider reprs would otherwise wrap two variants onto one tag.
    let range_checks = idents.iter().map(|ident| {
        let message = format!("`{name}::{ident}` has a discriminant outside the `i32` tag range");
        quote! {
            ::core::assert!(
                (#name::#ident as i128) >= (::core::primitive::i32::MIN as i128)
                    && (#name::#ident as i128) <= (::core::primitive::i32::MAX as i128),
                #message
            );
        }
    });

    Ok(quote! {
        const _: () = {
            #(#range_checks)*
        };

        impl ::herald::Signal for #name {
            fn tag(&self) -> ::herald::Tag {
                ::herald::Tag(match self {
                    #(Self::#idents => Self::#idents as i32,)*
                })
            }
        }

        impl ::core::convert::From<#name> for ::herald::Tag {
            fn from(signal: #name) -> Self {
                ::herald::Signal::tag(&signal)
            }
        }
    })
}
