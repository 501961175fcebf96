//! Error objects and error documents
//!
//! The aggregate status-code derivation replicates a legacy heuristic: it
//! approximates the "most severe common class" of the collected errors by
//! rounding each status down to its hundreds class and replacing the
//! accumulator whenever the classes diverge. It is intentionally not a
//! "maximum status" rule and must not be rewritten as one.

use crate::document::JsonApiObject;
use crate::link::{Links, Meta};
use indexmap::IndexMap;
use serde::Serialize;

/// A single error object.
///
/// Immutable once built; use [`Error::builder`] to construct one.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Error {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub source: Option<ErrorSource>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<Links>,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub meta: Meta,
}

impl Error {
	pub fn builder() -> ErrorBuilder {
		ErrorBuilder::default()
	}

	/// The numeric status of this error; unparseable or absent statuses
	/// count as 0, matching the integer cast of the original
	/// implementation.
	pub fn status_value(&self) -> u16 {
		self.status
			.as_deref()
			.and_then(|status| status.parse::<u16>().ok())
			.unwrap_or(0)
	}
}

/// Builder producing an immutable [`Error`].
#[derive(Debug, Clone, Default)]
pub struct ErrorBuilder {
	error: Error,
}

impl ErrorBuilder {
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.error.id = Some(id.into());
		self
	}

	/// HTTP status as a decimal string, e.g. `"404"`.
	pub fn status(mut self, status: impl Into<String>) -> Self {
		self.error.status = Some(status.into());
		self
	}

	pub fn code(mut self, code: impl Into<String>) -> Self {
		self.error.code = Some(code.into());
		self
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.error.title = Some(title.into());
		self
	}

	pub fn detail(mut self, detail: impl Into<String>) -> Self {
		self.error.detail = Some(detail.into());
		self
	}

	pub fn source(mut self, source: ErrorSource) -> Self {
		self.error.source = Some(source);
		self
	}

	pub fn links(mut self, links: Links) -> Self {
		self.error.links = Some(links);
		self
	}

	pub fn meta(mut self, meta: Meta) -> Self {
		self.error.meta = meta;
		self
	}

	pub fn build(self) -> Error {
		self.error
	}
}

/// The origin of an error within the offending request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorSource {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pointer: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parameter: Option<String>,
}

impl ErrorSource {
	/// A JSON pointer into the request body.
	pub fn from_pointer(pointer: impl Into<String>) -> Self {
		Self {
			pointer: Some(pointer.into()),
			parameter: None,
		}
	}

	/// The name of the offending query parameter.
	pub fn from_parameter(parameter: impl Into<String>) -> Self {
		Self {
			pointer: None,
			parameter: Some(parameter.into()),
		}
	}
}

/// A document aggregating error objects, in insertion order, without
/// deduplication.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ErrorDocument {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jsonapi: Option<JsonApiObject>,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub meta: Meta,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<Links>,
	pub errors: Vec<Error>,
}

impl ErrorDocument {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_error(&mut self, error: Error) -> &mut Self {
		self.errors.push(error);
		self
	}

	/// Derive the response status code for this document.
	///
	/// An explicit code always wins. A single error yields its own status.
	/// Multiple errors are folded with the legacy rounding heuristic
	/// described at the module level.
	pub fn status_code(&self, explicit: Option<u16>) -> u16 {
		if let Some(code) = explicit {
			return code;
		}

		if self.errors.len() == 1 {
			return self.errors[0].status_value();
		}

		let mut code: u16 = 500;
		for error in &self.errors {
			let rounded = error.status_value() / 100 * 100;
			if code.abs_diff(rounded) >= 100 {
				code = rounded;
			}
		}

		code
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn error_with_status(status: &str) -> Error {
		Error::builder().status(status).build()
	}

	#[test]
	fn test_single_error_returns_own_status() {
		let mut document = ErrorDocument::new();
		document.add_error(error_with_status("404"));
		assert_eq!(document.status_code(None), 404);
	}

	#[test]
	fn test_explicit_status_overrides_derivation() {
		let mut document = ErrorDocument::new();
		document.add_error(error_with_status("404"));
		assert_eq!(document.status_code(Some(422)), 422);
	}

	// The rounding fold is replicated legacy behavior, checked against the
	// literal sequences rather than any "worst status" intuition.
	#[rstest]
	#[case(&["404", "403"], 400)]
	#[case(&["404", "599"], 500)]
	#[case(&["599", "404"], 400)]
	#[case(&["404", "422"], 400)]
	#[case(&["400", "500"], 500)]
	#[case(&["500", "400"], 400)]
	fn test_multi_error_status_rounding(#[case] statuses: &[&str], #[case] expected: u16) {
		let mut document = ErrorDocument::new();
		for status in statuses {
			document.add_error(error_with_status(status));
		}
		assert_eq!(document.status_code(None), expected);
	}

	#[test]
	fn test_errors_keep_insertion_order_without_dedup() {
		let mut document = ErrorDocument::new();
		document
			.add_error(error_with_status("404"))
			.add_error(error_with_status("404"));
		assert_eq!(document.errors.len(), 2);
	}

	#[test]
	fn test_error_document_serialization() {
		let mut document = ErrorDocument::new();
		document.add_error(
			Error::builder()
				.status("400")
				.code("QUERY_PARAM_UNRECOGNIZED")
				.title("Query parameter can't be recognized")
				.source(ErrorSource::from_parameter("foo"))
				.build(),
		);

		assert_eq!(
			serde_json::to_value(&document).unwrap(),
			json!({
				"errors": [{
					"status": "400",
					"code": "QUERY_PARAM_UNRECOGNIZED",
					"title": "Query parameter can't be recognized",
					"source": {"parameter": "foo"}
				}]
			})
		);
	}

	#[test]
	fn test_unparseable_status_counts_as_zero() {
		assert_eq!(error_with_status("abc").status_value(), 0);
		assert_eq!(Error::default().status_value(), 0);
	}
}
