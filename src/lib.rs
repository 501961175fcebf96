//! # nuages
//!
//! A JSON:API document transformation and content negotiation library.
//!
//! This crate is a facade over the internal workspace crates:
//! - **schema**: the wire document model (resources, relationships,
//!   links, error documents and their status derivation)
//! - **request**: request-side parsing (sparse fieldsets, inclusion
//!   paths, query strings)
//! - **transform**: the transformation engine (per-type transformers,
//!   the registry, the document builder)
//! - **negotiation**: media-type negotiation and request/response
//!   validation
//!
//! ## Features
//!
//! - **default** / **full**: everything below
//! - **schema**, **request**, **transform**, **negotiation**: pick the
//!   layers you need
//!
//! ## Example
//!
//! ```rust,ignore
//! use nuages::{DocumentBuilder, JsonApiRequest, TransformerRegistry};
//!
//! let mut registry = TransformerRegistry::new();
//! registry.register::<Article>(ArticleTransformer);
//!
//! let request = JsonApiRequest::from_query_str(base_uri, query);
//! let document = DocumentBuilder::new(&registry, &request)
//!     .build_single(&article)?;
//! let body = serde_json::to_string(&document)?;
//! ```

#[cfg(feature = "schema")]
pub use nuages_schema as schema;

#[cfg(feature = "request")]
pub use nuages_request as request;

#[cfg(feature = "transform")]
pub use nuages_transform as transform;

#[cfg(feature = "negotiation")]
pub use nuages_negotiation as negotiation;

#[cfg(feature = "schema")]
pub use nuages_schema::{
	Document, Error, ErrorDocument, ErrorSource, Link, Links, Meta, ResourceIdentifier,
	ResourceObject,
};

#[cfg(feature = "request")]
pub use nuages_request::{Fieldsets, IncludePaths, JsonApiRequest, RequestContext};

#[cfg(feature = "transform")]
pub use nuages_transform::{
	DocumentBuilder, DomainRef, Relationship, ResourceTransformer, TransformError,
	TransformerRegistry,
};

#[cfg(feature = "negotiation")]
pub use nuages_negotiation::{NegotiationError, RequestValidator, ResponseValidator};
