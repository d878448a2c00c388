use proc_macro2::TokenStream;
use quote::{
	quote,
	quote_spanned,
};
use syn::{
	ext::IdentExt,
	parse_quote,
	spanned::Spanned,
	Data,
	DeriveInput,
	Fields,
	Generics,
	Index,
	Path,
};

use crate::attributes::{
	ContainerOptions,
	FieldOptions,
};

/// Require `ToValue` for all type parameters
fn add_bounds(mut generics: Generics, krate: &Path) -> Generics {
	let params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
	let where_clause = generics.make_where_clause();
	for ident in params {
		where_clause.predicates.push(parse_quote!(#ident: #krate::ToValue));
	}
	generics
}

fn body(input: &DeriveInput, krate: &Path) -> syn::Result<TokenStream> {
	let data = match &input.data {
		Data::Struct(data) => data,
		_ => {
			return Err(syn::Error::new_spanned(
				input,
				"ToValue can only be derived for structs",
			));
		},
	};

	match &data.fields {
		Fields::Named(fields) => {
			let mut entries = Vec::new();
			for field in &fields.named {
				let options = FieldOptions::parse(&field.attrs)?;
				if options.skip {
					continue;
				}
				let ident = field.ident.as_ref().expect("named field");
				let key = options.rename.unwrap_or_else(|| ident.unraw().to_string());
				entries.push(quote_spanned! {field.span()=>
					mapping.insert(#key, &self.#ident);
				});
			}
			Ok(quote! {
				let mut mapping = #krate::Mapping::new();
				#(#entries)*
				#krate::Value::Mapping(mapping)
			})
		},
		Fields::Unnamed(fields) => {
			let mut items = Vec::new();
			for (index, field) in fields.unnamed.iter().enumerate() {
				let options = FieldOptions::parse(&field.attrs)?;
				if options.rename.is_some() {
					return Err(syn::Error::new_spanned(
						field,
						"rename isn't supported on tuple struct fields",
					));
				}
				if options.skip {
					continue;
				}
				let index = Index::from(index);
				items.push(quote_spanned! {field.span()=>
					#krate::ToValue::to_value(&self.#index)
				});
			}
			Ok(quote! {
				#krate::Value::Sequence(::std::vec![#(#items),*])
			})
		},
		Fields::Unit => Ok(quote! {
			#krate::Value::Absent
		}),
	}
}

pub fn derive(input: &DeriveInput) -> syn::Result<TokenStream> {
	let ContainerOptions { krate } = ContainerOptions::parse(&input.attrs)?;
	let body = body(input, &krate)?;

	let ident = &input.ident;
	let generics = add_bounds(input.generics.clone(), &krate);
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

	Ok(quote! {
		impl #impl_generics #krate::ToValue for #ident #ty_generics #where_clause {
			fn to_value(&self) -> #krate::Value {
				#body
			}
		}
	})
}
