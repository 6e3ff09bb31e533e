//! Derive macros for box office actions
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - classifies action variants as commands or events
//!
//! # Example
//!
//! ```ignore
//! use festival_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum OrderAction {
//!     #[command]
//!     Submit,
//!
//!     #[event]
//!     CheckoutAccepted { reference: String },
//! }
//!
//! assert!(OrderAction::Submit.is_command());
//! assert_eq!(OrderAction::Submit.name(), "Submit");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, parse_macro_input};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_command()` - true for variants marked `#[command]` (inputs from the user)
/// - `is_event()` - true for variants marked `#[event]` (outcomes of effects)
/// - `name()` - the variant name, for log fields and metrics labels
///
/// Unmarked variants are neither commands nor events.
///
/// # Errors
///
/// Produces a compile error if applied to a non-enum type or if a variant
/// carries both `#[command]` and `#[event]`.
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_action(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_action(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(Action)] can only be used on enums",
        ));
    };

    let mut command_arms = Vec::new();
    let mut event_arms = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_event = has_attribute(&variant.attrs, "event");

        if is_command && is_event {
            return Err(syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[command] and #[event]",
            ));
        }

        let pattern = variant_pattern(&variant.ident, &variant.fields);
        let label = variant.ident.to_string();

        if is_command {
            command_arms.push(quote! { #pattern => true, });
        }
        if is_event {
            event_arms.push(quote! { #pattern => true, });
        }
        name_arms.push(quote! { #pattern => #label, });
    }

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Returns true if this action is a command
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#command_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action is an event
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_event(&self) -> bool {
                match self {
                    #(#event_arms)*
                    _ => false,
                }
            }

            /// Returns the variant name
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    })
}

fn variant_pattern(variant: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(_) => quote! { Self::#variant { .. } },
        Fields::Unnamed(_) => quote! { Self::#variant(..) },
        Fields::Unit => quote! { Self::#variant },
    }
}

/// Check if attributes contain a specific marker
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
