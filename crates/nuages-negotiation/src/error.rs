//! Boundary errors and their error-document rendering
//!
//! Unlike engine failures, these errors are part of normal operation:
//! a client sent something the protocol rejects, and the rejection is
//! itself answered with a JSON:API error document.

use nuages_schema::{Error, ErrorDocument, ErrorSource, Meta};
use serde_json::Value;
use thiserror::Error as ThisError;

/// A request or response rejected at the protocol boundary.
#[derive(Debug, Clone, ThisError)]
#[non_exhaustive]
pub enum NegotiationError {
	/// The Content-Type header carried the JSON:API media type with
	/// parameters. Answered with 415.
	#[error("The media type '{media_type}' in the Content-Type header is unsupported!")]
	MediaTypeUnsupported { media_type: String },

	/// The Accept header offered the JSON:API media type only with
	/// parameters. Answered with 406.
	#[error("The media type '{media_type}' in the Accept header is unacceptable!")]
	MediaTypeUnacceptable { media_type: String },

	#[error("Query parameter '{param}' can't be recognized!")]
	QueryParamUnrecognized { param: String },

	/// `original` echoes the offending body when the validator is
	/// configured to include it.
	#[error("Request body is an invalid JSON document: {message}")]
	RequestBodyInvalidJson {
		message: String,
		original: Option<String>,
	},

	#[error("Response body is an invalid JSON document: {message}")]
	ResponseBodyInvalidJson {
		message: String,
		original: Option<String>,
	},
}

impl NegotiationError {
	/// The HTTP status this error is answered with. A malformed response
	/// body is the server's fault, hence 500.
	pub fn status(&self) -> u16 {
		match self {
			Self::MediaTypeUnsupported { .. } => 415,
			Self::MediaTypeUnacceptable { .. } => 406,
			Self::QueryParamUnrecognized { .. } => 400,
			Self::RequestBodyInvalidJson { .. } => 400,
			Self::ResponseBodyInvalidJson { .. } => 500,
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			Self::MediaTypeUnsupported { .. } => "MEDIA_TYPE_UNSUPPORTED",
			Self::MediaTypeUnacceptable { .. } => "MEDIA_TYPE_UNACCEPTABLE",
			Self::QueryParamUnrecognized { .. } => "QUERY_PARAM_UNRECOGNIZED",
			Self::RequestBodyInvalidJson { .. } => "REQUEST_BODY_INVALID_JSON",
			Self::ResponseBodyInvalidJson { .. } => "RESPONSE_BODY_INVALID_JSON",
		}
	}

	pub fn title(&self) -> &'static str {
		match self {
			Self::MediaTypeUnsupported { .. } => "Unsupported media type",
			Self::MediaTypeUnacceptable { .. } => "Unacceptable media type",
			Self::QueryParamUnrecognized { .. } => "Unrecognized query parameter",
			Self::RequestBodyInvalidJson { .. } => "Request body is an invalid JSON document",
			Self::ResponseBodyInvalidJson { .. } => "Response body is an invalid JSON document",
		}
	}

	/// Render this error as a single error-document member.
	pub fn to_error(&self) -> Error {
		let detail = match self {
			Self::RequestBodyInvalidJson { message, .. }
			| Self::ResponseBodyInvalidJson { message, .. } => message.clone(),
			_ => self.to_string(),
		};
		let mut builder = Error::builder()
			.status(self.status().to_string())
			.code(self.code())
			.title(self.title())
			.detail(detail);

		match self {
			Self::QueryParamUnrecognized { param } => {
				builder = builder.source(ErrorSource::from_parameter(param.clone()));
			}
			Self::RequestBodyInvalidJson {
				original: Some(original),
				..
			}
			| Self::ResponseBodyInvalidJson {
				original: Some(original),
				..
			} => {
				let mut meta = Meta::new();
				meta.insert("original".to_string(), Value::String(original.clone()));
				builder = builder.meta(meta);
			}
			_ => {}
		}

		builder.build()
	}

	/// Render this error as a complete one-error document.
	pub fn error_document(&self) -> ErrorDocument {
		let mut document = ErrorDocument::new();
		document.add_error(self.to_error());
		document
	}
}

/// Collect several boundary errors into one error document; its status
/// follows the document-level derivation rule.
pub fn error_document_for(errors: impl IntoIterator<Item = NegotiationError>) -> ErrorDocument {
	let mut document = ErrorDocument::new();
	for error in errors {
		document.add_error(error.to_error());
	}
	document
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(NegotiationError::MediaTypeUnsupported { media_type: "a/b".to_string() }, 415)]
	#[case(NegotiationError::MediaTypeUnacceptable { media_type: "a/b".to_string() }, 406)]
	#[case(NegotiationError::QueryParamUnrecognized { param: "foo".to_string() }, 400)]
	#[case(
		NegotiationError::RequestBodyInvalidJson { message: "bad".to_string(), original: None },
		400
	)]
	#[case(
		NegotiationError::ResponseBodyInvalidJson { message: "bad".to_string(), original: None },
		500
	)]
	fn test_status_mapping(#[case] error: NegotiationError, #[case] status: u16) {
		assert_eq!(error.status(), status);
		assert_eq!(error.error_document().status_code(None), status);
	}

	#[test]
	fn test_query_param_message() {
		let error = NegotiationError::QueryParamUnrecognized {
			param: "foo".to_string(),
		};
		assert_eq!(error.to_string(), "Query parameter 'foo' can't be recognized!");
	}

	#[test]
	fn test_query_param_source() {
		let error = NegotiationError::QueryParamUnrecognized {
			param: "foo".to_string(),
		};
		let document = error.error_document();
		let source = document.errors[0].source.as_ref().unwrap();
		assert_eq!(source.parameter.as_deref(), Some("foo"));
	}

	#[test]
	fn test_invalid_body_echoes_original() {
		let error = NegotiationError::RequestBodyInvalidJson {
			message: "bad".to_string(),
			original: Some("{abc".to_string()),
		};
		let member = error.to_error();
		assert_eq!(member.meta.get("original"), Some(&Value::String("{abc".to_string())));
	}

	#[test]
	fn test_invalid_body_without_original() {
		let error = NegotiationError::RequestBodyInvalidJson {
			message: "bad".to_string(),
			original: None,
		};
		assert!(error.to_error().meta.is_empty());
	}

	#[test]
	fn test_combined_document_status() {
		let document = error_document_for([
			NegotiationError::QueryParamUnrecognized {
				param: "foo".to_string(),
			},
			NegotiationError::QueryParamUnrecognized {
				param: "bar".to_string(),
			},
		]);
		assert_eq!(document.errors.len(), 2);
		assert_eq!(document.status_code(None), 400);
	}
}
