//! Request-side filters for the document transformation engine
//!
//! Parses the `fields[<type>]` and `include` query parameters into the
//! filters the engine consults during traversal, and exposes the
//! [`RequestContext`] capability consumed by `nuages-transform`.

pub mod fieldset;
pub mod include;
pub mod request;

pub use fieldset::Fieldsets;
pub use include::IncludePaths;
pub use request::{JsonApiRequest, RequestContext, RECOGNIZED_QUERY_PARAMS};
