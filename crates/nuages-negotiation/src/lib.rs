//! Content negotiation and message validation
//!
//! The protocol boundary around the transformation engine: media-type
//! negotiation for the JSON:API media type, recognition of the reserved
//! query parameters, and JSON linting of request and response bodies.
//! Every rejection carries enough to render a complete error document.

pub mod error;
pub mod media_type;
pub mod validator;

pub use error::{error_document_for, NegotiationError};
pub use media_type::{MediaType, JSON_API_MEDIA_TYPE};
pub use validator::{RequestValidator, ResponseValidator};
