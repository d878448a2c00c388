use crate::{
	render,
	Value,
};
use std::borrow::Cow;

/// Types with a text representation; they are rendered as leaf elements.
///
/// Implementing only this trait doesn't make a type convertible: wrap it with `Value::leaf` (or
/// also implement `ToValue`) to pass it to `to_xml`.
pub trait XmlValue {
	/// Inner text of the element
	fn xml_value(&self) -> Cow<'_, str>;
}

/// Types producing their own element given a tag name.
///
/// Wrapping such a type with `Value::custom` bypasses all default rendering rules.
pub trait XmlTag {
	/// Complete XML for this value as element named `tag`
	fn xml_tag(&self, tag: &str) -> String;
}

/// Conversion into the dynamically-typed `Value`.
///
/// Can be derived for structs (if `derive` feature is active).
pub trait ToValue {
	/// Build a `Value` tree from `self`
	fn to_value(&self) -> Value;

	/// Same as `to_value`, but may borrow if `self` already is a `Value`.
	fn as_value(&self) -> Cow<'_, Value> {
		Cow::Owned(self.to_value())
	}
}

/// Every convertible value can render itself with the default rules.
impl<T: ToValue + ?Sized> XmlTag for T {
	fn xml_tag(&self, tag: &str) -> String {
		render(tag, &self.as_value())
	}
}
