//! Policies for writing leaf text
//!
//! Rendering is parameterized by a "marker" type implementing `Escape`; the default `Verbatim`
//! writes text unchanged, so reserved characters end up in the output as they are.

use std::borrow::Cow;

/// Decides how leaf and fallback text is written.
///
/// Tag names are never passed through the policy.
pub trait Escape {
	/// Transform text before it is placed between tags
	fn escape_text(text: &str) -> Cow<'_, str>;
}

/// Writes text unchanged; this is the default.
pub struct Verbatim;

impl Escape for Verbatim {
	fn escape_text(text: &str) -> Cow<'_, str> {
		Cow::Borrowed(text)
	}
}

/// Escapes `<`, `>`, `&`, `"` and `'` as character entities.
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub struct Escaped;

#[cfg(feature = "quick-xml")]
impl Escape for Escaped {
	fn escape_text(text: &str) -> Cow<'_, str> {
		::quick_xml::escape::escape(text)
	}
}
