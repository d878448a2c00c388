// use `cargo run -p xml-dictionary --example payload` to run from git repository base directory

use std::collections::BTreeMap;
use xml_dictionary::{to_xml, Blob, Mapping, ToValue, Value};

/// a struct that is serialized as mapping of its fields
#[derive(ToValue)]
pub struct Device {
	#[xml_dictionary(rename = "device-id")]
	pub id: u32,
	pub tags: Vec<&'static str>,
	pub firmware: Option<Blob>,
}

fn main() {
	let mut settings = BTreeMap::new();
	settings.insert("volume", 7);
	settings.insert("brightness", 40);

	let payload = Mapping::new()
		.with("device", Device {
			id: 5,
			tags: vec!["kitchen", "speaker"],
			firmware: Some(Blob(vec![0xde, 0xad, 0xbe, 0xef])),
		})
		.with("settings", settings)
		.with("owner", None::<String>)
		.with("seen", Value::describe(std::net::Ipv4Addr::LOCALHOST));

	eprintln!("Generating XML output...");

	println!("{}", to_xml("payload", &payload));
}
