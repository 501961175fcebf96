//! Document builder
//!
//! Orchestrates one document build: resolve the transformer for each
//! primary object, walk its relationships recursively, register included
//! resources, apply the request's fieldset filter, and assemble the final
//! document.

use crate::error::TransformError;
use crate::included::Included;
use crate::relationship::{Relationship, RelationshipData};
use crate::transformer::TransformerRegistry;
use nuages_request::RequestContext;
use nuages_schema::{
	Document, IdentifierData, JsonApiObject, Links, Meta, PrimaryData, RelationshipObject,
	ResourceIdentifier, ResourceKey, ResourceObject,
};
use std::any::Any;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Builds success documents from domain objects.
///
/// A builder borrows the transformer registry and the request context; it
/// creates a fresh [`Included`] registry and traversal state for every
/// build call, so one builder may serve any number of sequential builds
/// and concurrent builds never share mutable state.
pub struct DocumentBuilder<'a> {
	registry: &'a TransformerRegistry,
	request: &'a dyn RequestContext,
	default_included_paths: HashSet<String>,
	links: Option<Links>,
	meta: Meta,
	jsonapi: Option<JsonApiObject>,
}

impl<'a> DocumentBuilder<'a> {
	pub fn new(registry: &'a TransformerRegistry, request: &'a dyn RequestContext) -> Self {
		Self {
			registry,
			request,
			default_included_paths: HashSet::new(),
			links: None,
			meta: Meta::new(),
			jsonapi: None,
		}
	}

	/// Root-anchored dotted paths included when the client requests no
	/// inclusion at all. Client-supplied paths always take precedence.
	pub fn with_default_included_paths(
		mut self,
		paths: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		self.default_included_paths = paths.into_iter().map(Into::into).collect();
		self
	}

	/// Document-level links.
	pub fn with_links(mut self, links: Links) -> Self {
		self.links = Some(links);
		self
	}

	/// Document-level metadata, merged into every built document.
	pub fn with_meta(mut self, meta: Meta) -> Self {
		self.meta = meta;
		self
	}

	/// Emit the top-level `jsonapi` member.
	pub fn with_jsonapi(mut self, jsonapi: JsonApiObject) -> Self {
		self.jsonapi = Some(jsonapi);
		self
	}

	/// A document for a single resource that was not found: `data: null`.
	pub fn build_null(&self) -> Document {
		self.assemble(PrimaryData::Single(None), Included::new())
	}

	/// Build a document around one primary domain object.
	pub fn build_single(&self, object: &dyn Any) -> Result<Document, TransformError> {
		let mut included = Included::new();
		let mut visited = Vec::new();
		let resource = self.transform_resource(object, "", &mut included, &mut visited)?;
		debug!(
			resource_type = %resource.resource_type,
			id = %resource.id,
			included = included.len(),
			"built single-resource document"
		);
		Ok(self.assemble(PrimaryData::Single(Some(resource)), included))
	}

	/// Build a document around a collection of primary domain objects.
	///
	/// All items share one included-resource registry, so a related
	/// resource reachable from several primaries appears exactly once.
	/// An empty input yields `data: []`, never `data: null`.
	pub fn build_collection<'o>(
		&self,
		objects: impl IntoIterator<Item = &'o dyn Any>,
	) -> Result<Document, TransformError> {
		let mut included = Included::new();
		let mut primary = Vec::new();
		for object in objects {
			let mut visited = Vec::new();
			primary.push(self.transform_resource(object, "", &mut included, &mut visited)?);
		}
		debug!(
			primary = primary.len(),
			included = included.len(),
			"built collection document"
		);
		Ok(self.assemble(PrimaryData::Collection(primary), included))
	}

	fn assemble(&self, data: PrimaryData, included: Included) -> Document {
		let mut document = Document::new(data);
		document.jsonapi = self.jsonapi.clone();
		document.meta = self.meta.clone();
		document.links = self.links.clone();
		// An empty included member is still emitted when the client asked
		// for inclusion explicitly.
		document.included = if !included.is_empty() || self.request.has_include_param() {
			Some(included.into_resources())
		} else {
			None
		};
		document
	}

	/// Transform one domain object into a full resource object, recursing
	/// into its relationships. `visited` holds the identities along the
	/// current inclusion path, for cycle detection.
	fn transform_resource(
		&self,
		object: &dyn Any,
		base_path: &str,
		included: &mut Included,
		visited: &mut Vec<ResourceKey>,
	) -> Result<ResourceObject, TransformError> {
		let transformer = self.registry.resolve(object)?;
		let identifier = transformer.transform_to_identifier(object)?;
		let resource_type = identifier.resource_type.clone();
		let key = identifier.key();
		trace!(identity = %key, base_path, "transforming resource");

		let mut resource = ResourceObject::new(identifier);
		resource.links = transformer.links(object);
		resource.meta = transformer.meta(object);

		let declared_attributes = transformer.attributes(object);
		let relationships = transformer.relationships(object)?;
		for name in relationships.keys() {
			if declared_attributes.contains_key(name) {
				return Err(TransformError::FieldCollision {
					resource_type: resource_type.clone(),
					field: name.clone(),
				});
			}
		}

		for (name, value) in declared_attributes {
			if self.request.is_field_included(&resource_type, &name) {
				resource.attributes.insert(name, value);
			}
		}

		visited.push(key);
		let transformed = self.transform_relationships(
			&mut resource,
			&resource_type,
			relationships,
			base_path,
			included,
			visited,
		);
		visited.pop();
		transformed?;

		Ok(resource)
	}

	fn transform_relationships(
		&self,
		resource: &mut ResourceObject,
		resource_type: &str,
		relationships: indexmap::IndexMap<String, Relationship>,
		base_path: &str,
		included: &mut Included,
		visited: &mut Vec<ResourceKey>,
	) -> Result<(), TransformError> {
		for (name, relationship) in relationships {
			// A field excluded by the fieldset is omitted entirely, not
			// emitted as an empty placeholder.
			if !self.request.is_field_included(resource_type, &name) {
				continue;
			}

			let member =
				self.transform_relationship(&name, relationship, base_path, included, visited)?;
			resource.relationships.insert(name, member);
		}
		Ok(())
	}

	fn transform_relationship(
		&self,
		name: &str,
		relationship: Relationship,
		base_path: &str,
		included: &mut Included,
		visited: &mut Vec<ResourceKey>,
	) -> Result<RelationshipObject, TransformError> {
		let path = if base_path.is_empty() {
			name.to_string()
		} else {
			format!("{}.{}", base_path, name)
		};
		let expand =
			self.request
				.is_relationship_included(base_path, name, &self.default_included_paths);

		let data = match relationship.data {
			RelationshipData::ToOne(None) => IdentifierData::One(None),
			RelationshipData::ToOne(Some(related)) => IdentifierData::One(Some(
				self.transform_related(related.as_ref(), &path, expand, included, visited)?,
			)),
			RelationshipData::ToMany(related) => {
				let mut identifiers = Vec::with_capacity(related.len());
				for item in &related {
					identifiers.push(self.transform_related(
						item.as_ref(),
						&path,
						expand,
						included,
						visited,
					)?);
				}
				IdentifierData::Many(identifiers)
			}
		};

		Ok(RelationshipObject {
			links: relationship.links.filter(|links| !links.is_empty()),
			meta: relationship.meta,
			data,
		})
	}

	/// Emit the identifier for a related object and, when its path is
	/// included, register its full resource, recursing into its own
	/// relationships. Re-descending into an identity already on the
	/// current path would loop; the cycle point is emitted as an
	/// identifier-only leaf instead.
	fn transform_related(
		&self,
		object: &dyn Any,
		path: &str,
		expand: bool,
		included: &mut Included,
		visited: &mut Vec<ResourceKey>,
	) -> Result<ResourceIdentifier, TransformError> {
		let transformer = self.registry.resolve(object)?;
		let identifier = transformer.transform_to_identifier(object)?;

		if expand {
			let key = identifier.key();
			if visited.contains(&key) {
				debug!(identity = %key, path, "cycle on inclusion path; emitting identifier leaf");
			} else {
				let resource = self.transform_resource(object, path, included, visited)?;
				included.add(resource);
			}
		}

		Ok(identifier)
	}
}
