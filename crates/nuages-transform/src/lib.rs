//! Resource document transformation engine
//!
//! Walks a domain-object graph and produces a normalized JSON:API
//! document: primary resources, their relationship members, and a
//! deduplicated `included` set, honoring the request's sparse fieldsets
//! and inclusion paths.
//!
//! Domain types are serialized by a [`ResourceTransformer`] implemented
//! once per type and registered in a [`TransformerRegistry`] keyed by the
//! object's runtime type. The [`DocumentBuilder`] drives the traversal;
//! transformers only declare identity, attributes and relationships.
//!
//! One build invocation is synchronous and single-threaded, owns its own
//! included-resource registry and traversal context, and performs no I/O.
//! Concurrent builds are safe because no state is shared between calls.

pub mod builder;
pub mod error;
pub mod included;
pub mod relationship;
pub mod transformer;

pub use builder::DocumentBuilder;
pub use error::TransformError;
pub use included::Included;
pub use relationship::{DomainRef, Relationship, RelationshipData};
pub use transformer::{downcast, ResourceTransformer, TransformerRegistry};
