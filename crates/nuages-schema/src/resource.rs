//! Resource identifiers and resource objects

use crate::link::{Links, Meta};
use crate::relationship::RelationshipObject;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// The canonical `(type, id)` identity of a resource, with optional
/// metadata.
///
/// Identity equality is over `(type, id)` only; use [`ResourceIdentifier::key`]
/// when an identity is needed as a map key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceIdentifier {
	#[serde(rename = "type")]
	pub resource_type: String,
	pub id: String,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub meta: Meta,
}

impl ResourceIdentifier {
	pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
		Self {
			resource_type: resource_type.into(),
			id: id.into(),
			meta: Meta::new(),
		}
	}

	pub fn with_meta(mut self, meta: Meta) -> Self {
		self.meta = meta;
		self
	}

	/// The hashable `(type, id)` identity of this resource.
	pub fn key(&self) -> ResourceKey {
		ResourceKey {
			resource_type: self.resource_type.clone(),
			id: self.id.clone(),
		}
	}
}

/// Hashable resource identity used for deduplication and cycle tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
	pub resource_type: String,
	pub id: String,
}

impl std::fmt::Display for ResourceKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.resource_type, self.id)
	}
}

/// A full resource object: identity plus attributes, relationship members
/// and links.
///
/// Empty members are omitted from the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceObject {
	#[serde(rename = "type")]
	pub resource_type: String,
	pub id: String,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub attributes: IndexMap<String, Value>,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub relationships: IndexMap<String, RelationshipObject>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<Links>,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub meta: Meta,
}

impl ResourceObject {
	pub fn new(identifier: ResourceIdentifier) -> Self {
		Self {
			resource_type: identifier.resource_type,
			id: identifier.id,
			attributes: IndexMap::new(),
			relationships: IndexMap::new(),
			links: None,
			meta: identifier.meta,
		}
	}

	/// The identifier of this resource, carrying its metadata.
	pub fn identifier(&self) -> ResourceIdentifier {
		ResourceIdentifier {
			resource_type: self.resource_type.clone(),
			id: self.id.clone(),
			meta: self.meta.clone(),
		}
	}

	pub fn key(&self) -> ResourceKey {
		ResourceKey {
			resource_type: self.resource_type.clone(),
			id: self.id.clone(),
		}
	}
}
