//! `ToValue` and `XmlValue` implementations for std and `indexmap` types

use crate::{
	Blob,
	Mapping,
	ToValue,
	Value,
	XmlValue,
};
use indexmap::{
	IndexMap,
	IndexSet,
};
use std::{
	borrow::Cow,
	collections::{
		BTreeMap,
		BTreeSet,
		HashMap,
		HashSet,
		VecDeque,
	},
	fmt,
	rc::Rc,
	sync::Arc,
};

macro_rules! display_leaf {
	($($t:ty),* $(,)?) => {
		$(
			impl XmlValue for $t {
				fn xml_value(&self) -> Cow<'_, str> {
					Cow::Owned(self.to_string())
				}
			}

			impl ToValue for $t {
				fn to_value(&self) -> Value {
					Value::leaf(self)
				}
			}
		)*
	};
}

display_leaf!(
	bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl XmlValue for str {
	fn xml_value(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

impl XmlValue for String {
	fn xml_value(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

impl XmlValue for Cow<'_, str> {
	fn xml_value(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

impl ToValue for str {
	fn to_value(&self) -> Value {
		Value::Text(self.to_owned())
	}
}

impl ToValue for String {
	fn to_value(&self) -> Value {
		Value::Text(self.clone())
	}
}

impl ToValue for Cow<'_, str> {
	fn to_value(&self) -> Value {
		Value::Text(self.to_string())
	}
}

impl ToValue for Blob {
	fn to_value(&self) -> Value {
		Value::Binary(self.clone())
	}
}

impl ToValue for Value {
	fn to_value(&self) -> Value {
		self.clone()
	}

	fn as_value(&self) -> Cow<'_, Value> {
		Cow::Borrowed(self)
	}
}

impl ToValue for Mapping {
	fn to_value(&self) -> Value {
		Value::Mapping(self.clone())
	}
}

impl ToValue for () {
	fn to_value(&self) -> Value {
		Value::Absent
	}
}

/// `None` is absent
impl<T: ToValue> ToValue for Option<T> {
	fn to_value(&self) -> Value {
		match self {
			Some(v) => v.to_value(),
			None => Value::Absent,
		}
	}
}

macro_rules! forward_pointer {
	($($p:ident),*) => {
		$(
			impl<T: ToValue + ?Sized> ToValue for $p<T> {
				fn to_value(&self) -> Value {
					(**self).to_value()
				}

				fn as_value(&self) -> Cow<'_, Value> {
					(**self).as_value()
				}
			}
		)*
	};
}

forward_pointer!(Box, Rc, Arc);

impl<T: ToValue + ?Sized> ToValue for &T {
	fn to_value(&self) -> Value {
		(**self).to_value()
	}

	fn as_value(&self) -> Cow<'_, Value> {
		(**self).as_value()
	}
}

fn sequence<'a, T: ToValue + 'a>(items: impl IntoIterator<Item = &'a T>) -> Vec<Value> {
	items.into_iter().map(ToValue::to_value).collect()
}

fn mapping<'a, K, V>(entries: impl IntoIterator<Item = (&'a K, &'a V)>) -> Value
where
	K: fmt::Display + 'a,
	V: ToValue + 'a,
{
	Value::Mapping(entries.into_iter().collect())
}

impl<T: ToValue> ToValue for [T] {
	fn to_value(&self) -> Value {
		Value::Sequence(sequence(self))
	}
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
	fn to_value(&self) -> Value {
		Value::Sequence(sequence(self))
	}
}

impl<T: ToValue> ToValue for Vec<T> {
	fn to_value(&self) -> Value {
		Value::Sequence(sequence(self))
	}
}

impl<T: ToValue> ToValue for VecDeque<T> {
	fn to_value(&self) -> Value {
		Value::Sequence(sequence(self))
	}
}

impl<T: ToValue, S> ToValue for HashSet<T, S> {
	fn to_value(&self) -> Value {
		Value::Unordered(sequence(self))
	}
}

impl<T: ToValue> ToValue for BTreeSet<T> {
	fn to_value(&self) -> Value {
		Value::Unordered(sequence(self))
	}
}

impl<T: ToValue, S> ToValue for IndexSet<T, S> {
	fn to_value(&self) -> Value {
		Value::Unordered(sequence(self))
	}
}

/// Iteration order of `HashMap` is unspecified; use `BTreeMap`, `IndexMap` or `Mapping` for
/// deterministic output.
impl<K: fmt::Display, V: ToValue, S> ToValue for HashMap<K, V, S> {
	fn to_value(&self) -> Value {
		mapping(self)
	}
}

impl<K: fmt::Display, V: ToValue> ToValue for BTreeMap<K, V> {
	fn to_value(&self) -> Value {
		mapping(self)
	}
}

impl<K: fmt::Display, V: ToValue, S> ToValue for IndexMap<K, V, S> {
	fn to_value(&self) -> Value {
		mapping(self)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn texts(items: &[Value]) -> Vec<String> {
		items
			.iter()
			.map(|v| v.leaf_text().expect("leaf").into_owned())
			.collect()
	}

	#[test]
	fn scalars() {
		assert_eq!(true.xml_value(), "true");
		assert_eq!('x'.xml_value(), "x");
		assert_eq!((-42i64).xml_value(), "-42");
		assert_eq!(2.5f64.xml_value(), "2.5");
		assert_eq!("abc".xml_value(), "abc");
		assert!(matches!(String::from("abc").to_value(), Value::Text(ref t) if t == "abc"));
	}

	#[test]
	fn option_and_unit() {
		assert!(None::<i32>.to_value().is_absent());
		assert!(().to_value().is_absent());
		assert!(matches!(Some(3).to_value(), Value::Text(ref t) if t == "3"));
	}

	#[test]
	fn bytes_are_a_sequence_unless_wrapped() {
		assert!(matches!(vec![0u8, 1].to_value(), Value::Sequence(ref s) if s.len() == 2));
		assert!(matches!(Blob(vec![0u8, 1]).to_value(), Value::Binary(_)));
	}

	#[test]
	fn sets_are_unordered() {
		let set: BTreeSet<u32> = [3, 1, 2].iter().copied().collect();
		match set.to_value() {
			Value::Unordered(items) => assert_eq!(texts(&items), ["1", "2", "3"]),
			other => panic!("unexpected value: {:?}", other),
		}
	}

	#[test]
	fn index_map_keeps_insertion_order() {
		let mut map = IndexMap::new();
		map.insert("z", 1);
		map.insert("a", 2);
		match map.to_value() {
			Value::Mapping(m) => {
				let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
				assert_eq!(keys, ["z", "a"]);
			},
			other => panic!("unexpected value: {:?}", other),
		}
	}

	#[test]
	fn hash_set_is_unordered() {
		let set: HashSet<u32> = [5].iter().copied().collect();
		assert!(matches!(set.to_value(), Value::Unordered(_)));
		assert_eq!(crate::to_xml("s", &set), "<s><element>5</element></s>");
	}

	#[test]
	fn index_set_keeps_insertion_order() {
		let set: IndexSet<&str> = ["z", "a"].iter().copied().collect();
		assert_eq!(
			crate::to_xml("s", &set),
			"<s><element>z</element><element>a</element></s>",
		);
	}

	#[test]
	fn deque_and_array_are_sequences() {
		let deque: VecDeque<i32> = vec![1, 2].into();
		assert_eq!(
			crate::to_xml("d", &deque),
			"<d><element>1</element><element>2</element></d>",
		);
		assert_eq!(
			crate::to_xml("a", &[1u8; 2]),
			"<a><element>1</element><element>1</element></a>",
		);
	}

	#[test]
	fn shared_pointers_forward() {
		assert_eq!(crate::to_xml("r", &Rc::new(Some("x"))), "<r>x</r>");
		assert_eq!(crate::to_xml("a", &Arc::new(None::<&str>)), "<a></a>");
		let v = Value::Text("x".into());
		assert!(matches!(Arc::new(v).as_value(), Cow::Borrowed(_)));
	}

	#[test]
	fn collected_value_is_a_sequence() {
		let v: Value = (1..=2).collect();
		assert_eq!(
			crate::to_xml("c", &v),
			"<c><element>1</element><element>2</element></c>",
		);
	}

	#[test]
	fn mapping_extend_appends() {
		let mut m = Mapping::new().with("a", 1);
		m.extend(vec![("b", 2), ("a", 3)]);
		assert_eq!(crate::to_xml("m", &m), "<m><a>1</a><b>2</b><a>3</a></m>");
	}

	#[test]
	fn blob_from_bytes() {
		let blob = Blob::from(&b"\x00\x01\x02"[..]);
		assert_eq!(blob.as_bytes(), &[0, 1, 2]);
		assert_eq!(blob, Blob::from(vec![0, 1, 2]));
		assert_eq!(crate::to_xml("b", &blob), "<b>AAEC</b>");
	}

	#[test]
	fn value_borrows_itself() {
		let v = Value::Text("x".into());
		assert!(matches!(v.as_value(), Cow::Borrowed(_)));
		assert!(matches!((&&v).as_value(), Cow::Borrowed(_)));
		assert!(matches!(Box::new(v).as_value(), Cow::Borrowed(_)));
	}
}
