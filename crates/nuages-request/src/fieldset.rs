//! Sparse fieldsets
//!
//! A fieldset restricts which fields are emitted per resource type. A
//! field name refers to an attribute or a relationship uniformly. Absence
//! of an entry for a type means no restriction for that type.

use std::collections::{HashMap, HashSet};

/// Per-type field restrictions parsed from `fields[<type>]=<csv>`.
///
/// # Examples
///
/// ```
/// use nuages_request::Fieldsets;
///
/// let mut fieldsets = Fieldsets::new();
/// fieldsets.insert_csv("article", "title,author");
///
/// assert!(fieldsets.is_field_included("article", "title"));
/// assert!(!fieldsets.is_field_included("article", "body"));
/// // No entry for "user": every field is included.
/// assert!(fieldsets.is_field_included("user", "name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fieldsets {
	fields: HashMap<String, HashSet<String>>,
}

impl Fieldsets {
	pub fn new() -> Self {
		Self::default()
	}

	/// Restrict a resource type to a comma-separated list of field names.
	/// Surrounding whitespace is trimmed; empty segments are dropped.
	pub fn insert_csv(&mut self, resource_type: impl Into<String>, csv: &str) {
		let fields = csv
			.split(',')
			.map(str::trim)
			.filter(|field| !field.is_empty())
			.map(str::to_string)
			.collect();
		self.fields.insert(resource_type.into(), fields);
	}

	pub fn insert(&mut self, resource_type: impl Into<String>, fields: HashSet<String>) {
		self.fields.insert(resource_type.into(), fields);
	}

	/// Whether a field of the given type survives the restriction.
	pub fn is_field_included(&self, resource_type: &str, field: &str) -> bool {
		match self.fields.get(resource_type) {
			Some(allowed) => allowed.contains(field),
			None => true,
		}
	}

	pub fn is_restricted(&self, resource_type: &str) -> bool {
		self.fields.contains_key(resource_type)
	}
}
