//! Per-type resource transformers and their registry

use crate::error::TransformError;
use crate::relationship::Relationship;
use indexmap::IndexMap;
use nuages_schema::{Links, Meta, ResourceIdentifier};
use serde_json::Value;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Downcast a domain object handle to its concrete type.
///
/// Transformers call this at the top of every method; failure means the
/// registry dispatched an object of the wrong type, which is a
/// configuration error.
pub fn downcast<T: Any>(object: &dyn Any) -> Result<&T, TransformError> {
	object
		.downcast_ref::<T>()
		.ok_or(TransformError::UnexpectedDomainObject {
			expected: std::any::type_name::<T>(),
		})
}

/// The per-domain-type serialization strategy.
///
/// Implemented once per domain type and registered in a
/// [`TransformerRegistry`]. Implementations must be pure with respect to
/// the domain object and deterministic: the engine may invoke them any
/// number of times for the same object during one build.
///
/// Only identity, attributes and relationships are declared here; the
/// [`DocumentBuilder`](crate::DocumentBuilder) owns the traversal,
/// fieldset filtering and inclusion recursion.
pub trait ResourceTransformer: Send + Sync {
	/// The wire resource type, e.g. `"article"`.
	fn resource_type(&self) -> &str;

	/// The wire id of the given domain object.
	fn resource_id(&self, object: &dyn Any) -> Result<String, TransformError>;

	/// Attribute names and values, in emission order. Fieldset filtering
	/// happens in the engine; return every declared attribute.
	fn attributes(&self, _object: &dyn Any) -> IndexMap<String, Value> {
		IndexMap::new()
	}

	/// Declared relationships, in emission order.
	fn relationships(
		&self,
		_object: &dyn Any,
	) -> Result<IndexMap<String, Relationship>, TransformError> {
		Ok(IndexMap::new())
	}

	fn links(&self, _object: &dyn Any) -> Option<Links> {
		None
	}

	fn meta(&self, _object: &dyn Any) -> Meta {
		Meta::new()
	}

	/// Identity of the given domain object. Fails with
	/// [`TransformError::MissingIdentity`] when type or id comes up empty;
	/// that is always a programmer or configuration error and aborts the
	/// build.
	fn transform_to_identifier(
		&self,
		object: &dyn Any,
	) -> Result<ResourceIdentifier, TransformError> {
		let resource_type = self.resource_type();
		let id = self.resource_id(object)?;
		if resource_type.is_empty() || id.is_empty() {
			return Err(TransformError::MissingIdentity {
				resource_type: resource_type.to_string(),
				id,
			});
		}
		Ok(ResourceIdentifier::new(resource_type, id))
	}
}

/// Maps a domain object's runtime type to its transformer.
///
/// Populated up front, before any traversal begins; a lookup failure
/// during a build is fatal.
///
/// # Examples
///
/// ```
/// use nuages_transform::{downcast, ResourceTransformer, TransformerRegistry, TransformError};
/// use std::any::Any;
///
/// struct User { id: String }
///
/// struct UserTransformer;
///
/// impl ResourceTransformer for UserTransformer {
///     fn resource_type(&self) -> &str {
///         "user"
///     }
///
///     fn resource_id(&self, object: &dyn Any) -> Result<String, TransformError> {
///         Ok(downcast::<User>(object)?.id.clone())
///     }
/// }
///
/// let mut registry = TransformerRegistry::new();
/// registry.register::<User>(UserTransformer);
///
/// let user = User { id: "1".to_string() };
/// assert!(registry.resolve(&user).is_ok());
/// ```
#[derive(Default, Clone)]
pub struct TransformerRegistry {
	transformers: HashMap<TypeId, Arc<dyn ResourceTransformer>>,
}

impl TransformerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register the transformer for domain type `T`, replacing any
	/// previous registration.
	pub fn register<T: Any>(&mut self, transformer: impl ResourceTransformer + 'static) {
		self.transformers
			.insert(TypeId::of::<T>(), Arc::new(transformer));
	}

	/// Resolve the transformer for a domain object by its runtime type.
	pub fn resolve(&self, object: &dyn Any) -> Result<&dyn ResourceTransformer, TransformError> {
		let type_id = object.type_id();
		self.transformers
			.get(&type_id)
			.map(Arc::as_ref)
			.ok_or(TransformError::TransformerNotRegistered { type_id })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct User {
		id: String,
	}

	struct UserTransformer;

	impl ResourceTransformer for UserTransformer {
		fn resource_type(&self) -> &str {
			"user"
		}

		fn resource_id(&self, object: &dyn Any) -> Result<String, TransformError> {
			Ok(downcast::<User>(object)?.id.clone())
		}
	}

	#[test]
	fn test_resolve_registered_type() {
		let mut registry = TransformerRegistry::new();
		registry.register::<User>(UserTransformer);

		let user = User {
			id: "1".to_string(),
		};
		let transformer = registry.resolve(&user).unwrap();
		assert_eq!(transformer.resource_type(), "user");
	}

	#[test]
	fn test_resolve_unregistered_type_fails() {
		let registry = TransformerRegistry::new();
		let user = User {
			id: "1".to_string(),
		};
		assert!(matches!(
			registry.resolve(&user),
			Err(TransformError::TransformerNotRegistered { .. })
		));
	}

	#[test]
	fn test_transform_to_identifier() {
		let transformer = UserTransformer;
		let user = User {
			id: "42".to_string(),
		};
		let identifier = transformer.transform_to_identifier(&user).unwrap();
		assert_eq!(identifier.resource_type, "user");
		assert_eq!(identifier.id, "42");
	}

	#[test]
	fn test_empty_id_is_missing_identity() {
		let transformer = UserTransformer;
		let user = User { id: String::new() };
		assert!(matches!(
			transformer.transform_to_identifier(&user),
			Err(TransformError::MissingIdentity { .. })
		));
	}

	#[test]
	fn test_downcast_mismatch() {
		let value = 42u32;
		assert!(matches!(
			downcast::<User>(&value),
			Err(TransformError::UnexpectedDomainObject { .. })
		));
	}
}
