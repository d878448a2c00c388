#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/xml-dictionary/0.1.0")]
//! This library serializes ad-hoc structured data (nested maps, lists, sets, scalars, binary
//! blobs and missing values) into XML without a schema or a separate model type.
//!
//! Every input is first turned into a [`Value`], a closed sum over the supported shapes, and then
//! rendered recursively:
//! - leaves (text, numbers, booleans, base64-encoded binary blobs) become `<tag>text</tag>`,
//! - mappings become one child element per entry, named after the (stringified) key,
//! - sequences and sets become one `<element>` child per item,
//! - absent values (`None`) become an empty `<tag></tag>`,
//! - anything else is described through `std::fmt::Display`.
//!
//! ```
//! use xml_dictionary::{to_xml, Mapping};
//!
//! let payload = Mapping::new().with("name", "widget").with("sizes", vec![1, 2]);
//! assert_eq!(
//! 	to_xml("root", &payload),
//! 	"<root><name>widget</name><sizes><element>1</element><element>2</element></sizes></root>",
//! );
//! ```
//!
//! Text and tag names are written verbatim by default: reserved characters are *not* escaped and
//! keys are not checked to be valid XML names. Use [`to_xml_with`] with an escaping policy or
//! [`try_to_xml`] to opt into stricter behavior.
//!
//! For the following XML handling crates adaptors are included if enabled through the equally
//! named features:
//! - [`quick-xml`](https://crates.io/crates/quick-xml)
//!
//! If the `derive` feature is enabled `ToValue` can be derived for structs:
//!
//! ```
//! #[derive(xml_dictionary::ToValue)]
//! struct Point {
//! 	x: i32,
//! 	y: i32,
//! }
//!
//! assert_eq!(xml_dictionary::to_xml("p", &Point { x: 1, y: 2 }), "<p><x>1</x><y>2</y></p>");
//! ```
//!
//! Enums (and unions) are rejected:
//!
//! ```compile_fail
//! #[derive(xml_dictionary::ToValue)]
//! enum Direction {
//! 	Up,
//! }
//! ```

pub mod errors;
pub mod escape;
mod convert;
mod render;
mod traits;
mod value;

/// For now we use a simple boxed error to show the user
pub type Error = Box<dyn std::error::Error + Send + Sync>;
/// Result alias with out error type included
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub mod quick_xml;

#[cfg(any(test, feature = "_private-test"))]
mod test_struct;

pub use self::{
	render::{
		make_tag,
		render,
		render_mapping,
		render_sequence,
		render_with,
		to_xml,
		to_xml_with,
		try_to_xml,
		ELEMENT_TAG,
	},
	traits::{
		ToValue,
		XmlTag,
		XmlValue,
	},
	value::{
		Blob,
		Mapping,
		Value,
	},
};

#[cfg_attr(doc_cfg, doc(cfg(feature = "derive")))]
#[cfg(feature = "derive")]
pub use xml_dictionary_derive::ToValue;
