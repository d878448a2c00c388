#![allow(missing_docs)] // names should be good enough
//! Helper functions to generate common errors

use crate::Error;
use std::fmt;

pub(crate) enum RenderError {
	InvalidTagName { tag: String },
	EmptyTagName,
}

impl fmt::Debug for RenderError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidTagName { tag } => write!(f, "Invalid XML tag name: {:?}", tag),
			Self::EmptyTagName => write!(f, "Empty XML tag name"),
		}
	}
}

impl fmt::Display for RenderError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

impl std::error::Error for RenderError {}

pub fn invalid_tag_name(tag: &str) -> Error {
	if tag.is_empty() {
		return RenderError::EmptyTagName.into();
	}
	RenderError::InvalidTagName { tag: tag.into() }.into()
}
