use crate::{
	errors,
	escape::{
		Escape,
		Verbatim,
	},
	Mapping,
	Result,
	ToValue,
	Value,
	XmlValue,
};
use tracing::{
	debug,
	trace,
};

/// Tag of the children generated for sequence and set items
pub const ELEMENT_TAG: &str = "element";

/// Wrap `content` in an element named `name`: `<name>content</name>`
///
/// Neither `name` nor `content` are checked or escaped.
pub fn make_tag(name: &str, content: &str) -> String {
	let mut out = String::with_capacity(2 * name.len() + content.len() + 5);
	out.push('<');
	out.push_str(name);
	out.push('>');
	out.push_str(content);
	out.push_str("</");
	out.push_str(name);
	out.push('>');
	out
}

/// Serialize `value` as element named `root`
///
/// Leaf text is written verbatim (see `to_xml_with` for other policies).
pub fn to_xml<T: ToValue + ?Sized>(root: &str, value: &T) -> String {
	render(root, &value.as_value())
}

/// Serialize `value` as element named `root`, writing text with the given policy
pub fn to_xml_with<E: Escape, T: ToValue + ?Sized>(root: &str, value: &T) -> String {
	render_with::<E>(root, &value.as_value())
}

/// Like `to_xml`, but fails if any generated tag name isn't a valid XML name.
///
/// Names of custom values aren't checked beyond the tag they are given.
pub fn try_to_xml<T: ToValue + ?Sized>(root: &str, value: &T) -> Result<String> {
	let value = value.as_value();
	check_names(root, &value)?;
	Ok(render(root, &value))
}

/// Render a value tree as element named `tag`
pub fn render(tag: &str, value: &Value) -> String {
	render_with::<Verbatim>(tag, value)
}

/// Render a value tree as element named `tag`, writing text with the given policy
pub fn render_with<E: Escape>(tag: &str, value: &Value) -> String {
	match value {
		Value::Custom(custom) => {
			trace!(tag, "custom value renders itself");
			(**custom).xml_tag(tag)
		},
		Value::Text(text) => make_tag(tag, &E::escape_text(text)),
		// base64 never contains reserved characters
		Value::Binary(blob) => make_tag(tag, &blob.xml_value()),
		Value::Mapping(mapping) => make_tag(tag, &mapping_with::<E>(mapping)),
		Value::Unordered(items) => make_tag(tag, &sequence_with::<E>(items)),
		Value::Sequence(items) => make_tag(tag, &sequence_with::<E>(items)),
		Value::Absent => make_tag(tag, ""),
		Value::Fallback(value) => {
			trace!(tag, "describing fallback value");
			make_tag(tag, &E::escape_text(&value.to_string()))
		},
	}
}

/// Concatenated child elements of a mapping, one per entry in iteration order
pub fn render_mapping(mapping: &Mapping) -> String {
	mapping_with::<Verbatim>(mapping)
}

/// Concatenated `<element>` children, one per item in iteration order
pub fn render_sequence(items: &[Value]) -> String {
	sequence_with::<Verbatim>(items)
}

fn mapping_with<E: Escape>(mapping: &Mapping) -> String {
	mapping.iter().fold(String::new(), |mut out, (key, value)| {
		out.push_str(&render_with::<E>(key, value));
		out
	})
}

fn sequence_with<E: Escape>(items: &[Value]) -> String {
	items.iter().fold(String::new(), |mut out, item| {
		out.push_str(&render_with::<E>(ELEMENT_TAG, item));
		out
	})
}

fn check_names(tag: &str, value: &Value) -> Result<()> {
	if !is_valid_tag_name(tag) {
		debug!(tag, "rejecting invalid tag name");
		return Err(errors::invalid_tag_name(tag));
	}
	match value {
		Value::Mapping(mapping) => {
			for (key, value) in mapping.iter() {
				check_names(key, value)?;
			}
		},
		Value::Sequence(items) | Value::Unordered(items) => {
			for item in items {
				check_names(ELEMENT_TAG, item)?;
			}
		},
		_ => (),
	}
	Ok(())
}

// simplified XML `Name` production
fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_alphabetic() || c == '_' || c == ':' => (),
		_ => return false,
	}
	chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
}
