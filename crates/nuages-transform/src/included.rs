//! Included-resource registry
//!
//! One registry exists per document build. It accumulates the resources
//! reached through included relationships and deduplicates them by
//! `(type, id)` identity, keeping insertion order so output is
//! deterministic. The first full resource registered for an identity
//! wins; later registrations are no-ops, never errors.

use indexmap::IndexMap;
use nuages_schema::{ResourceKey, ResourceObject};

#[derive(Debug, Clone, Default)]
pub struct Included {
	resources: IndexMap<ResourceKey, ResourceObject>,
}

impl Included {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a resource; idempotent per identity.
	pub fn add(&mut self, resource: ResourceObject) {
		self.resources.entry(resource.key()).or_insert(resource);
	}

	pub fn is_empty(&self) -> bool {
		self.resources.is_empty()
	}

	pub fn len(&self) -> usize {
		self.resources.len()
	}

	/// Drain the registry into the `included` document member.
	pub fn into_resources(self) -> Vec<ResourceObject> {
		self.resources.into_values().collect()
	}
}
