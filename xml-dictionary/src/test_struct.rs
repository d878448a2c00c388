use crate::Blob;

#[derive(crate::ToValue)]
#[derive(Clone, PartialEq, Debug)]
#[xml_dictionary(crate = "crate")]
pub struct Record {
	pub id: u32,
	pub name: String,
	#[xml_dictionary(rename = "tag-list")]
	pub tags: Vec<String>,
	pub note: Option<String>,
	pub payload: Blob,
	pub location: Location,
	#[xml_dictionary(skip)]
	#[allow(dead_code)]
	pub revision: u64,
}

#[derive(crate::ToValue)]
#[derive(Clone, PartialEq, Debug)]
#[xml_dictionary(crate = "crate")]
pub struct Location(pub f64, pub f64);

impl Record {
	pub const SAMPLE_XML: &'static str = "<record><id>7</id><name>gadget</name>\
		<tag-list><element>a</element><element>b</element></tag-list><note></note>\
		<payload>AQID</payload><location><element>1.5</element><element>2.25</element></location>\
		</record>";

	pub fn sample() -> Self {
		Self {
			id: 7,
			name: "gadget".into(),
			tags: vec!["a".into(), "b".into()],
			note: None,
			payload: Blob(vec![1, 2, 3]),
			location: Location(1.5, 2.25),
			revision: 12,
		}
	}
}
