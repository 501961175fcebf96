//! Fatal transformation errors
//!
//! Every variant is a programmer or configuration error: the build aborts
//! immediately and the error propagates to the caller. The engine never
//! recovers from these internally.

use std::any::TypeId;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
	#[error("resource identity is incomplete: type='{resource_type}', id='{id}'")]
	MissingIdentity { resource_type: String, id: String },
	#[error("no resource transformer registered for domain object type {type_id:?}")]
	TransformerNotRegistered { type_id: TypeId },
	#[error("domain object is not a '{expected}'")]
	UnexpectedDomainObject { expected: &'static str },
	#[error("field '{field}' of resource type '{resource_type}' is declared both as an attribute and as a relationship")]
	FieldCollision { resource_type: String, field: String },
}
