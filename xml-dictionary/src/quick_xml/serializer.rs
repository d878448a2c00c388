use crate::{
	render::ELEMENT_TAG,
	Result,
	ToValue,
	Value,
	XmlValue,
};
use ::quick_xml::events::{
	BytesDecl,
	BytesEnd,
	BytesStart,
	BytesText,
	Event,
};
use std::io;
use tracing::debug;

/// Serialize value as root element of a full document in memory
pub fn serialize_document<T: ToValue + ?Sized>(root: &str, value: &T) -> Result<String> {
	let mut buf = Vec::new();
	let mut writer = ::quick_xml::Writer::new(&mut buf);
	let mut serializer = Serializer::new(&mut writer);
	serializer.serialize_document(root, &value.as_value())?;
	Ok(String::from_utf8(buf)?)
}

/// Serializer adaptor for `quick_xml::Writer`
///
/// Text is escaped by `quick-xml`; output of custom values is written unchanged.  Empty elements
/// are written as start and end tag, never as `<tag/>`.
pub struct Serializer<'w, W: io::Write> {
	writer: &'w mut ::quick_xml::Writer<W>,
}

impl<'w, W: io::Write> Serializer<'w, W> {
	/// New adaptor using the writer
	pub fn new(writer: &'w mut ::quick_xml::Writer<W>) -> Self {
		Self { writer }
	}

	/// Serialize full document: XML declaration and root element
	pub fn serialize_document(&mut self, root: &str, value: &Value) -> Result<()> {
		debug!(root, "serializing document");
		self.writer
			.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
		self.serialize_value(root, value)
	}

	/// Serialize value as single element named `tag`
	pub fn serialize_value(&mut self, tag: &str, value: &Value) -> Result<()> {
		match value {
			Value::Custom(custom) => {
				let raw = (**custom).xml_tag(tag);
				self.writer
					.write_event(Event::Text(BytesText::from_escaped(raw)))?;
				Ok(())
			},
			Value::Text(text) => self.element(tag, |s| s.text(text)),
			Value::Binary(blob) => self.element(tag, |s| s.text(&blob.xml_value())),
			Value::Mapping(mapping) => self.element(tag, |s| {
				for (key, child) in mapping.iter() {
					s.serialize_value(key, child)?;
				}
				Ok(())
			}),
			Value::Sequence(items) | Value::Unordered(items) => self.element(tag, |s| {
				for item in items {
					s.serialize_value(ELEMENT_TAG, item)?;
				}
				Ok(())
			}),
			Value::Absent => self.element(tag, |_| Ok(())),
			Value::Fallback(value) => self.element(tag, |s| s.text(&value.to_string())),
		}
	}

	fn element(&mut self, tag: &str, inner: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
		self.start(tag)?;
		inner(self)?;
		self.end(tag)
	}

	fn start(&mut self, tag: &str) -> Result<()> {
		self.writer.write_event(Event::Start(BytesStart::new(tag)))?;
		Ok(())
	}

	fn end(&mut self, tag: &str) -> Result<()> {
		self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
		Ok(())
	}

	fn text(&mut self, text: &str) -> Result<()> {
		if !text.is_empty() {
			self.writer.write_event(Event::Text(BytesText::new(text)))?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		make_tag,
		test_struct::*,
		Mapping,
		XmlTag,
	};
	use pretty_assertions::assert_eq;

	const DECL: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

	#[test]
	fn test() {
		assert_eq!(
			serialize_document("record", &Record::sample()).unwrap(),
			format!("{}{}", DECL, Record::SAMPLE_XML),
		);
	}

	#[test]
	fn escapes_text() {
		let m = Mapping::new().with("t", "a<b & c").with("e", None::<u8>);
		assert_eq!(
			serialize_document("r", &m).unwrap(),
			format!("{}<r><t>a&lt;b &amp; c</t><e></e></r>", DECL),
		);
	}

	#[test]
	fn custom_written_raw() {
		struct Raw;

		impl XmlTag for Raw {
			fn xml_tag(&self, tag: &str) -> String {
				make_tag(tag, "<b>bold</b>")
			}
		}

		let v = vec![Value::custom(Raw)];
		assert_eq!(
			serialize_document("l", &v).unwrap(),
			format!("{}<l><element><b>bold</b></element></l>", DECL),
		);
	}
}
