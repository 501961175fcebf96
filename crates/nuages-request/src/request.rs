//! The request context consumed by the transformation engine

use crate::fieldset::Fieldsets;
use crate::include::IncludePaths;
use std::collections::HashSet;
use tracing::trace;

/// Query parameter names the engine understands. Anything else at the top
/// level of the query string is rejected by the negotiation layer.
pub const RECOGNIZED_QUERY_PARAMS: [&str; 5] = ["fields", "include", "sort", "page", "filter"];

/// Capability the engine consults while traversing a domain graph.
pub trait RequestContext {
	/// Whether a field (attribute or relationship) of the given resource
	/// type survives the active sparse fieldset.
	fn is_field_included(&self, resource_type: &str, field: &str) -> bool;

	/// Whether the relationship reached at `base_path` / `relationship_name`
	/// should be expanded into the `included` set. `default_paths` applies
	/// only when the client requested no inclusion.
	fn is_relationship_included(
		&self,
		base_path: &str,
		relationship_name: &str,
		default_paths: &HashSet<String>,
	) -> bool;

	/// Base URI for link resolution.
	fn base_uri(&self) -> &str;

	/// Whether the request carried an `include` parameter at all; decides
	/// whether an empty `included` member is still emitted.
	fn has_include_param(&self) -> bool;
}

/// Join a base relationship path and a relationship name into the full
/// dotted path (`"author"` at depth 0, `"author.comments"` below).
pub(crate) fn full_path(base_path: &str, relationship_name: &str) -> String {
	if base_path.is_empty() {
		relationship_name.to_string()
	} else {
		format!("{}.{}", base_path, relationship_name)
	}
}

/// A parsed request: base URI plus the fieldset and inclusion filters.
///
/// # Examples
///
/// ```
/// use nuages_request::{JsonApiRequest, RequestContext};
/// use std::collections::HashSet;
///
/// let request = JsonApiRequest::from_query_str(
///     "http://example.com/api",
///     "fields%5Barticle%5D=title&include=author",
/// );
///
/// assert!(request.is_field_included("article", "title"));
/// assert!(!request.is_field_included("article", "body"));
/// assert!(request.is_relationship_included("", "author", &HashSet::new()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonApiRequest {
	base_uri: String,
	fieldsets: Fieldsets,
	includes: IncludePaths,
	query_keys: Vec<String>,
}

impl JsonApiRequest {
	pub fn new(base_uri: impl Into<String>) -> Self {
		Self {
			base_uri: base_uri.into(),
			..Self::default()
		}
	}

	/// Parse a raw (percent-encoded) query string.
	///
	/// Keys of the form `fields[<type>]` feed the fieldset filter,
	/// `include` feeds the inclusion paths; all top-level keys are retained
	/// so the negotiation layer can reject unrecognized ones.
	pub fn from_query_str(base_uri: impl Into<String>, query: &str) -> Self {
		let mut request = Self::new(base_uri);

		for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
			let top_level = key.split('[').next().unwrap_or(&key).to_string();
			if !request.query_keys.contains(&top_level) {
				request.query_keys.push(top_level);
			}

			if let Some(resource_type) = key
				.strip_prefix("fields[")
				.and_then(|rest| rest.strip_suffix(']'))
			{
				request.fieldsets.insert_csv(resource_type, &value);
			} else if key == "include" {
				request.includes = IncludePaths::parse(&value);
			}
		}

		trace!(query, keys = ?request.query_keys, "parsed query string");
		request
	}

	pub fn with_fieldsets(mut self, fieldsets: Fieldsets) -> Self {
		self.fieldsets = fieldsets;
		self
	}

	pub fn with_includes(mut self, includes: IncludePaths) -> Self {
		self.includes = includes;
		self
	}

	pub fn fieldsets(&self) -> &Fieldsets {
		&self.fieldsets
	}

	pub fn includes(&self) -> &IncludePaths {
		&self.includes
	}

	/// Top-level query keys in order of first appearance.
	pub fn query_keys(&self) -> &[String] {
		&self.query_keys
	}

	/// Top-level query keys outside [`RECOGNIZED_QUERY_PARAMS`].
	pub fn unrecognized_query_params(&self) -> Vec<&str> {
		self.query_keys
			.iter()
			.map(String::as_str)
			.filter(|key| !RECOGNIZED_QUERY_PARAMS.contains(key))
			.collect()
	}
}

impl RequestContext for JsonApiRequest {
	fn is_field_included(&self, resource_type: &str, field: &str) -> bool {
		self.fieldsets.is_field_included(resource_type, field)
	}

	fn is_relationship_included(
		&self,
		base_path: &str,
		relationship_name: &str,
		default_paths: &HashSet<String>,
	) -> bool {
		self.includes
			.includes_path(&full_path(base_path, relationship_name), default_paths)
	}

	fn base_uri(&self) -> &str {
		&self.base_uri
	}

	fn has_include_param(&self) -> bool {
		self.includes.is_present()
	}
}
