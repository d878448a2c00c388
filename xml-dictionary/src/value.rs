use crate::traits::{
	ToValue,
	XmlTag,
	XmlValue,
};
use base64::{
	engine::general_purpose::STANDARD,
	Engine,
};
use std::{
	borrow::Cow,
	fmt,
	iter::FromIterator,
	sync::Arc,
};

/// Dynamically-typed input for XML serialization.
///
/// The variants partition every possible input; rendering matches on them exhaustively (see
/// [`render`](crate::render())), so there is no "unsupported type" error.
#[derive(Clone)]
pub enum Value {
	/// Leaf text, written as inner text of a single element.
	Text(String),
	/// Binary leaf, written as base64 text.
	Binary(Blob),
	/// Key/value entries, one child element per entry named after the key.
	Mapping(Mapping),
	/// Ordered items, one `<element>` child per item.
	Sequence(Vec<Value>),
	/// Items of a set-like source, written like `Sequence`.
	///
	/// The order is the order the source collection produced; for hash based sets it is
	/// unspecified.
	Unordered(Vec<Value>),
	/// Missing value; written as empty element.
	Absent,
	/// Anything else, described through `Display` when rendered.
	Fallback(Arc<dyn fmt::Display + Send + Sync>),
	/// Value rendering its own element for a given tag, bypassing the default rules.
	Custom(Arc<dyn XmlTag + Send + Sync>),
}

impl Value {
	/// Leaf from anything with a text representation
	pub fn leaf<T: XmlValue + ?Sized>(value: &T) -> Self {
		Value::Text(value.xml_value().into_owned())
	}

	/// Fallback value rendered via `Display`
	pub fn describe<T: fmt::Display + Send + Sync + 'static>(value: T) -> Self {
		Value::Fallback(Arc::new(value))
	}

	/// Value with custom rendering
	pub fn custom<T: XmlTag + Send + Sync + 'static>(value: T) -> Self {
		Value::Custom(Arc::new(value))
	}

	/// Key/value pair list; keeps duplicate keys and their order.
	pub fn pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: fmt::Display,
		V: ToValue,
	{
		Value::Mapping(pairs.into_iter().collect())
	}

	/// Text of leaf values (`Text` and base64 encoded `Binary`)
	pub fn leaf_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Value::Text(text) => Some(Cow::Borrowed(text)),
			Value::Binary(blob) => Some(blob.xml_value()),
			_ => None,
		}
	}

	/// Whether this is `Value::Absent`
	pub fn is_absent(&self) -> bool {
		matches!(self, Value::Absent)
	}
}

impl Default for Value {
	fn default() -> Self {
		Value::Absent
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Value::Binary(blob) => f.debug_tuple("Binary").field(blob).finish(),
			Value::Mapping(mapping) => f.debug_tuple("Mapping").field(mapping).finish(),
			Value::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
			Value::Unordered(items) => f.debug_tuple("Unordered").field(items).finish(),
			Value::Absent => f.write_str("Absent"),
			Value::Fallback(value) => f.debug_tuple("Fallback").field(&value.to_string()).finish(),
			Value::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

impl<V: ToValue> FromIterator<V> for Value {
	fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
		Value::Sequence(iter.into_iter().map(|v| v.to_value()).collect())
	}
}

/// Ordered list of key/value entries.
///
/// Keys are stringified on insertion; duplicate keys are not merged and produce sibling elements
/// with the same name.
#[derive(Clone, Debug, Default)]
pub struct Mapping {
	entries: Vec<(String, Value)>,
}

impl Mapping {
	/// Empty mapping
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an entry
	pub fn insert<K: fmt::Display, V: ToValue + ?Sized>(&mut self, key: K, value: &V) {
		self.entries.push((key.to_string(), value.to_value()));
	}

	/// Append an entry (builder style)
	pub fn with<K: fmt::Display, V: ToValue>(mut self, key: K, value: V) -> Self {
		self.insert(key, &value);
		self
	}

	/// Number of entries (including duplicates)
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether there are no entries
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// First value stored under `key`
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Entries in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K: fmt::Display, V: ToValue> FromIterator<(K, V)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let entries = iter
			.into_iter()
			.map(|(k, v)| (k.to_string(), v.to_value()))
			.collect();
		Self { entries }
	}
}

impl<K: fmt::Display, V: ToValue> Extend<(K, V)> for Mapping {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (k, v) in iter {
			self.insert(k, &v);
		}
	}
}

/// Binary data; rendered as standard (padded) base64 text.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Blob(pub Vec<u8>);

impl Blob {
	/// Raw bytes
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Blob(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Blob(bytes.to_vec())
	}
}

impl XmlValue for Blob {
	fn xml_value(&self) -> Cow<'_, str> {
		Cow::Owned(STANDARD.encode(&self.0))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn blob_base64() {
		assert_eq!(Blob(vec![0, 1, 2]).xml_value(), "AAEC");
		assert_eq!(Blob(b"hello".to_vec()).xml_value(), "aGVsbG8=");
		assert_eq!(Blob::default().xml_value(), "");
	}

	#[test]
	fn leaf_text() {
		assert_eq!(Value::Text("x".into()).leaf_text().as_deref(), Some("x"));
		assert_eq!(Value::Binary(Blob(vec![0xff])).leaf_text().as_deref(), Some("/w=="));
		assert!(Value::Absent.leaf_text().is_none());
		assert!(Value::Sequence(Vec::new()).leaf_text().is_none());
	}

	#[test]
	fn mapping_keeps_duplicates() {
		let m = Mapping::new().with("a", 1).with("b", 2).with("a", 3);
		assert_eq!(m.len(), 3);
		let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["a", "b", "a"]);
		assert_eq!(m.get("a").and_then(Value::leaf_text).as_deref(), Some("1"));
		assert!(m.get("c").is_none());
	}

	#[test]
	fn pairs_stringify_keys() {
		let v = Value::pairs(vec![(1, "one"), (2, "two")]);
		match v {
			Value::Mapping(m) => {
				let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
				assert_eq!(keys, ["1", "2"]);
			},
			other => panic!("unexpected value: {:?}", other),
		}
	}

	#[test]
	fn debug_output() {
		assert_eq!(format!("{:?}", Value::Absent), "Absent");
		assert_eq!(format!("{:?}", Value::describe(1.5)), r#"Fallback("1.5")"#);
	}

	#[test]
	fn value_is_send_sync() {
		fn check<T: Send + Sync>() {}
		check::<Value>();
	}
}
