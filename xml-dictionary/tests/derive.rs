use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use xml_dictionary::{
	to_xml,
	ToValue,
	Value,
};

#[derive(ToValue)]
struct Order {
	id: u64,
	#[xml_dictionary(rename = "customer-name")]
	customer: String,
	lines: Vec<Line>,
	attributes: BTreeMap<String, String>,
	r#type: &'static str,
	#[xml_dictionary(skip)]
	#[allow(dead_code)]
	internal: bool,
}

#[derive(ToValue)]
struct Line {
	sku: &'static str,
	quantity: u32,
	discount: Option<f32>,
}

#[derive(ToValue)]
struct Pair<T>(T, T);

#[derive(ToValue)]
struct Labeled<T> {
	label: &'static str,
	value: T,
}

#[derive(ToValue)]
struct Nothing;

#[test]
fn named_struct() {
	let mut attributes = BTreeMap::new();
	attributes.insert("priority".to_string(), "high".to_string());
	attributes.insert("channel".to_string(), "web".to_string());

	let order = Order {
		id: 1001,
		customer: "Ada".into(),
		lines: vec![
			Line { sku: "A-1", quantity: 2, discount: None },
			Line { sku: "B-7", quantity: 1, discount: Some(0.5) },
		],
		attributes,
		r#type: "express",
		internal: true,
	};

	assert_eq!(
		to_xml("order", &order),
		"<order><id>1001</id><customer-name>Ada</customer-name><lines>\
		<element><sku>A-1</sku><quantity>2</quantity><discount></discount></element>\
		<element><sku>B-7</sku><quantity>1</quantity><discount>0.5</discount></element>\
		</lines><attributes><channel>web</channel><priority>high</priority></attributes>\
		<type>express</type></order>",
	);
}

#[test]
fn generic_structs() {
	assert_eq!(
		to_xml("pair", &Pair("a", "b")),
		"<pair><element>a</element><element>b</element></pair>",
	);
	assert_eq!(
		to_xml("x", &Labeled { label: "size", value: vec![1, 2] }),
		"<x><label>size</label><value><element>1</element><element>2</element></value></x>",
	);
}

#[test]
fn unit_struct_is_absent() {
	assert!(Nothing.to_value().is_absent());
	assert_eq!(to_xml("n", &Nothing), "<n></n>");
}

#[test]
fn derived_value_in_mapping() {
	let v = Value::pairs(vec![("first", Pair(1, 2)), ("second", Pair(3, 4))]);
	assert_eq!(
		to_xml("r", &v),
		"<r><first><element>1</element><element>2</element></first>\
		<second><element>3</element><element>4</element></second></r>",
	);
}
