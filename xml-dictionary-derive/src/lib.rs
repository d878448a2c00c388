//! Derive `xml-dictionary` trait implementations
//!
//! Deriving `ToValue` supports the following attributes on the struct:
//! - `#[xml_dictionary(crate = "...")]`: Path of `xml-dictionary` crate in local scope; defaults
//!   to `::xml_dictionary`
//!
//! And the following attributes on struct fields:
//! - `#[xml_dictionary(rename = "...")]`: Tag name of the field; defaults to the field name (only
//!   for named fields)
//! - `#[xml_dictionary(skip)]`: Don't serialize the field
//!
//! Structs with named fields become mappings (one entry per field in declaration order), tuple
//! structs become sequences, and unit structs become absent values.
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/xml-dictionary-derive/0.1.0")]

extern crate proc_macro;

mod attributes;
mod to_value;

use proc_macro::TokenStream;
use syn::{
	parse_macro_input,
	DeriveInput,
};

/// Derive `xml-dictionary::ToValue`
#[proc_macro_derive(ToValue, attributes(xml_dictionary))]
pub fn derive_to_value(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match to_value::derive(&input) {
		Ok(output) => output,
		Err(e) => e.to_compile_error(),
	})
}
