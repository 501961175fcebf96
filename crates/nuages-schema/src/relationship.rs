//! Wire-side relationship members
//!
//! A relationship member always carries its `data` when emitted; `links`
//! and `meta` appear only when non-empty. Whether a member is emitted at
//! all is decided upstream by the fieldset filter.

use crate::link::{Links, Meta};
use crate::resource::ResourceIdentifier;
use indexmap::IndexMap;
use serde::Serialize;

/// Resource linkage: a nullable single identifier or an ordered sequence.
///
/// `One(None)` means "no related resource"; `Many(vec![])` means a
/// known-empty collection. The two are distinct, valid states.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IdentifierData {
	One(Option<ResourceIdentifier>),
	Many(Vec<ResourceIdentifier>),
}

impl IdentifierData {
	pub fn is_empty(&self) -> bool {
		match self {
			IdentifierData::One(data) => data.is_none(),
			IdentifierData::Many(data) => data.is_empty(),
		}
	}
}

/// A relationship member of a resource object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipObject {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<Links>,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub meta: Meta,
	pub data: IdentifierData,
}

impl RelationshipObject {
	pub fn to_one(data: Option<ResourceIdentifier>) -> Self {
		Self {
			links: None,
			meta: Meta::new(),
			data: IdentifierData::One(data),
		}
	}

	pub fn to_many(data: Vec<ResourceIdentifier>) -> Self {
		Self {
			links: None,
			meta: Meta::new(),
			data: IdentifierData::Many(data),
		}
	}

	pub fn with_links(mut self, links: Links) -> Self {
		self.links = Some(links);
		self
	}

	pub fn with_meta(mut self, meta: Meta) -> Self {
		self.meta = meta;
		self
	}
}
