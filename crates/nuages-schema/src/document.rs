//! Success documents

use crate::link::{Links, Meta};
use crate::resource::ResourceObject;
use indexmap::IndexMap;
use serde::Serialize;

/// The top-level `jsonapi` member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonApiObject {
	pub version: String,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub meta: Meta,
}

impl JsonApiObject {
	pub fn new(version: impl Into<String>) -> Self {
		Self {
			version: version.into(),
			meta: Meta::new(),
		}
	}
}

impl Default for JsonApiObject {
	fn default() -> Self {
		Self::new("1.0")
	}
}

/// The primary `data` member of a success document.
///
/// A single primary resource may be absent (`data: null`); a collection is
/// always an array, so an empty collection serializes as `data: []` and is
/// never confused with a missing single resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimaryData {
	Single(Option<ResourceObject>),
	Collection(Vec<ResourceObject>),
}

/// A success document: primary data plus the deduplicated `included` set.
///
/// `included` is `None` when it is empty and the request asked for no
/// inclusion; `Some(vec![])` serializes as an explicit empty array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jsonapi: Option<JsonApiObject>,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub meta: Meta,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<Links>,
	pub data: PrimaryData,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub included: Option<Vec<ResourceObject>>,
}

impl Document {
	pub fn new(data: PrimaryData) -> Self {
		Self {
			jsonapi: None,
			meta: Meta::new(),
			links: None,
			data,
			included: None,
		}
	}
}
