//! Derive macro implementation used by `dimensional-core`.
//!
//! `dimensional-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit` and `crate::conversion::Identity`, so it is intended to be used by `dimensional-core` (or by crates
//! that expose an identical crate-root API).
//!
//! Most users should depend on `dimensional` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `crate::Unit for MyUnit`.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol (required)
//! - `dimension = SomeDim`: dimension type, any type implementing `crate::Dimension` (required)
//! - `conversion = SomeConversion`: conversion strategy towards the standard unit of the dimension (optional,
//!   defaults to `crate::conversion::Identity`)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitStr, Token, Type,
};

/// Derive `crate::Unit` for a zero-sized unit marker.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol` and `dimension`, and optionally
/// `conversion`.
///
/// This macro is intended for use by `dimensional-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Unit` can only be derived for non-generic unit markers",
        ));
    }

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let conversion = match &unit_attr.conversion {
        Some(conversion) => quote!(#conversion),
        None => quote!(crate::conversion::Identity),
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            type Dim = #dimension;
            type Conversion = #conversion;
            const SYMBOL: &'static str = #symbol;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Type,
    conversion: Option<Type>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Type> = None;
        let mut conversion: Option<Type> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "conversion" => {
                    conversion = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            conversion,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km", dimension = Length, conversion = Kilo)]
            pub struct Kilometer;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "km");
        assert!(attr.conversion.is_some());
    }

    #[test]
    fn test_parse_unit_attribute_without_conversion() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length)]
            pub struct Meter;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
        assert!(attr.conversion.is_none());
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Length)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m")]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, ratio = 1.0)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("unknown attribute `ratio`"));
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length)]
            pub struct Meter;
        };

        let tokens = derive_unit_impl(input).unwrap();
        let code = tokens.to_string();
        assert!(code.contains("impl crate :: Unit for Meter"));
        assert!(code.contains("type Dim = Length"));
        assert!(code.contains("type Conversion = crate :: conversion :: Identity"));
        assert!(code.contains("const SYMBOL : & 'static str = \"m\""));
    }

    #[test]
    fn test_derive_unit_impl_with_generic_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "N", dimension = MulDim<Mass, Acceleration>)]
            pub struct Newton;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("type Dim = MulDim < Mass , Acceleration >"));
    }

    #[test]
    fn test_derive_unit_impl_with_conversion() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "°C", dimension = Temperature, conversion = CelsiusScale)]
            pub struct Celsius;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("type Conversion = CelsiusScale"));
    }

    #[test]
    fn test_derive_unit_impl_rejects_generics() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length)]
            pub struct Meter<T>(T);
        };

        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("non-generic"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "m", dimension = Length,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_unit_attribute_parse_duplicate_symbol() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            symbol = "m", symbol = "km", dimension = Length
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "km");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
