use syn::{
	Attribute,
	Lit,
	Meta,
	NestedMeta,
	Path,
};

pub fn all_attributes(attrs: &[Attribute]) -> syn::Result<Vec<NestedMeta>> {
	let mut nested = Vec::new();
	for attr in attrs.iter().filter(|attr| attr.path.is_ident("xml_dictionary")) {
		match attr.parse_meta()? {
			Meta::List(meta) => nested.extend(meta.nested),
			other => {
				return Err(syn::Error::new_spanned(other, "expected #[xml_dictionary(...)]"));
			},
		}
	}
	Ok(nested)
}

pub fn string_lit(lit: &Lit) -> syn::Result<String> {
	if let Lit::Str(s) = lit {
		Ok(s.value())
	} else {
		Err(syn::Error::new_spanned(lit, "invalid literal; expected string"))
	}
}

/// Options on the deriving struct
pub struct ContainerOptions {
	/// Path of the `xml-dictionary` crate; defaults to `::xml_dictionary`
	pub krate: Path,
}

impl ContainerOptions {
	pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
		let mut krate = None;
		for meta in all_attributes(attrs)? {
			match &meta {
				NestedMeta::Meta(Meta::NameValue(nv)) if nv.path.is_ident("crate") => {
					let path = string_lit(&nv.lit)?;
					krate = Some(syn::parse_str::<Path>(&path).map_err(|e| syn::Error::new_spanned(&nv.lit, e))?);
				},
				other => {
					return Err(syn::Error::new_spanned(other, "unknown xml_dictionary container attribute"));
				},
			}
		}
		Ok(Self {
			krate: krate.unwrap_or_else(|| syn::parse_quote!(::xml_dictionary)),
		})
	}
}

/// Options on a single struct field
#[derive(Default)]
pub struct FieldOptions {
	/// Tag name to use instead of the field name
	pub rename: Option<String>,
	/// Don't include field
	pub skip: bool,
}

impl FieldOptions {
	pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
		let mut options = Self::default();
		for meta in all_attributes(attrs)? {
			match &meta {
				NestedMeta::Meta(Meta::Path(path)) if path.is_ident("skip") => {
					options.skip = true;
				},
				NestedMeta::Meta(Meta::NameValue(nv)) if nv.path.is_ident("rename") => {
					options.rename = Some(string_lit(&nv.lit)?);
				},
				other => {
					return Err(syn::Error::new_spanned(other, "unknown xml_dictionary field attribute"));
				},
			}
		}
		Ok(options)
	}
}
