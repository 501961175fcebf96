//! Domain-side relationships
//!
//! A transformer declares each relationship as a reference to the related
//! domain object(s); the engine turns these into wire members lazily,
//! only for fields the request actually asks for.

use nuages_schema::{Links, Meta};
use std::any::Any;
use std::sync::Arc;

/// Shared handle to a related domain object. Domain graphs hand these to
/// the engine; cyclic graphs are expressed with `Arc`/`Weak` on the
/// domain side and upgraded inside the transformer.
pub type DomainRef = Arc<dyn Any + Send + Sync>;

/// The related object(s) a relationship points at.
///
/// `ToOne(None)` means "no related resource". An empty `ToMany` is a
/// known-empty collection; the two serialize differently (`null` vs `[]`)
/// and are both valid.
#[derive(Clone)]
pub enum RelationshipData {
	ToOne(Option<DomainRef>),
	ToMany(Vec<DomainRef>),
}

/// A relationship declared by a resource transformer.
#[derive(Clone)]
pub struct Relationship {
	pub data: RelationshipData,
	pub links: Option<Links>,
	pub meta: Meta,
}

impl Relationship {
	pub fn to_one(related: Option<DomainRef>) -> Self {
		Self {
			data: RelationshipData::ToOne(related),
			links: None,
			meta: Meta::new(),
		}
	}

	pub fn to_many(related: Vec<DomainRef>) -> Self {
		Self {
			data: RelationshipData::ToMany(related),
			links: None,
			meta: Meta::new(),
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

	/// Whether this relationship carries no data, links or metadata.
	pub fn is_empty(&self) -> bool {
		let data_empty = match &self.data {
			RelationshipData::ToOne(related) => related.is_none(),
			RelationshipData::ToMany(related) => related.is_empty(),
		};
		data_empty && self.links.is_none() && self.meta.is_empty()
	}
}

impl std::fmt::Debug for Relationship {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let arity = match &self.data {
			RelationshipData::ToOne(Some(_)) => "to-one",
			RelationshipData::ToOne(None) => "to-one (empty)",
			RelationshipData::ToMany(related) => {
				return f
					.debug_struct("Relationship")
					.field("arity", &format_args!("to-many ({})", related.len()))
					.finish_non_exhaustive();
			}
		};
		f.debug_struct("Relationship")
			.field("arity", &arity)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_one_is_empty() {
		assert!(Relationship::to_one(None).is_empty());
		let related: DomainRef = Arc::new(42u32);
		assert!(!Relationship::to_one(Some(related)).is_empty());
	}

	#[test]
	fn test_to_many_is_empty() {
		assert!(Relationship::to_many(vec![]).is_empty());
		let related: DomainRef = Arc::new(42u32);
		assert!(!Relationship::to_many(vec![related]).is_empty());
	}

	#[test]
	fn test_links_make_relationship_non_empty() {
		let relationship = Relationship::to_one(None).with_links(Links::new(""));
		assert!(!relationship.is_empty());
	}
}
