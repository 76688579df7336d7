use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_quote};

pub fn expand(mut input: DeriveInput) -> TokenStream {
    let name = &input.ident;

    let params: Vec<_> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = input.generics.make_where_clause();
    for param in params {
        where_clause.predicates.push(parse_quote! {
            #param: ::core::marker::Send + ::core::marker::Sync + 'static
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics ::herald::Message for #name #ty_generics #where_clause {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_struct() {
        let output = expand(parse_quote! { struct Ping; }).to_string();
        assert!(output.contains(":: herald :: Message for Ping"));
    }

    #[test]
    fn test_type_params_are_bounded() {
        let output = expand(parse_quote! {
            struct Wrapped<T: Clone, U> { a: T, b: U }
        })
        .to_string();

        assert!(output.contains("T : :: core :: marker :: Send"));
        assert!(output.contains("U : :: core :: marker :: Send"));
        assert!(output.contains("'static"));
    }
}
