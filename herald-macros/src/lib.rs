//! Derive macros for Herald.
//!
//! - `#[derive(Message)]` - implements `herald::Message`
//! - `#[derive(Signal)]` - implements `herald::Signal` and `From<Self> for herald::Tag`
//!   for fieldless enums

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod message;
mod signal;

/// Derive macro for implementing the `Message` trait.
///
/// Every type parameter is bounded by `Send + Sync + 'static`, so a
/// parameter that cannot satisfy `Message` is reported where it is used.
#[proc_macro_derive(Message)]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    message::expand(input).into()
}

/// Derive macro turning a fieldless enum into a set of signal tags.
///
/// Each variant's discriminant (explicit or implicit) becomes its tag. A
/// discriminant that does not fit in an `i32`, possible with a wider
/// `#[repr]`, is a compile-time error.
#[proc_macro_derive(Signal)]
pub fn derive_signal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    signal::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
