//! Wire document model for the JSON:API media type
//!
//! Value objects describing the serialized shape of JSON:API documents:
//! links, metadata, resource identifiers, resource objects, relationship
//! members, success documents and error documents. The transformation
//! engine in `nuages-transform` produces these; callers serialize them
//! with serde.

pub mod document;
pub mod error;
pub mod link;
pub mod relationship;
pub mod resource;

pub use document::{Document, JsonApiObject, PrimaryData};
pub use error::{Error, ErrorBuilder, ErrorDocument, ErrorSource};
pub use link::{Link, Links, Meta};
pub use relationship::{IdentifierData, RelationshipObject};
pub use resource::{ResourceIdentifier, ResourceKey, ResourceObject};
