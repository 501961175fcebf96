//! Request and response validation
//!
//! Three independent checks run at the protocol boundary: media-type
//! negotiation over the Content-Type and Accept headers, query-parameter
//! recognition, and a JSON lint of the raw body. Each failure maps to a
//! [`NegotiationError`] that renders as a complete error document.

use crate::error::NegotiationError;
use crate::media_type::MediaType;
use nuages_request::JsonApiRequest;
use tracing::debug;

/// Validates inbound requests.
///
/// `include_original_body` controls whether a body-lint failure echoes
/// the offending body in the error's `meta.original`; it defaults to on.
#[derive(Debug, Clone)]
pub struct RequestValidator {
	include_original_body: bool,
}

impl Default for RequestValidator {
	fn default() -> Self {
		Self {
			include_original_body: true,
		}
	}
}

impl RequestValidator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn include_original_body(mut self, enabled: bool) -> Self {
		self.include_original_body = enabled;
		self
	}

	/// Negotiate the media types of a request.
	///
	/// The JSON:API media type is only valid without parameters: a
	/// Content-Type carrying it with parameters is unsupported, and an
	/// Accept header offering it only with parameters is unacceptable.
	/// Non-JSON:API media types pass untouched; so do absent headers.
	pub fn negotiate(&self, content_type: &str, accept: &str) -> Result<(), NegotiationError> {
		if let Some(media_type) = MediaType::parse(content_type) {
			if media_type.is_json_api() && media_type.has_parameters() {
				debug!(content_type, "unsupported media type");
				return Err(NegotiationError::MediaTypeUnsupported {
					media_type: content_type.trim().to_string(),
				});
			}
		}

		let offered: Vec<MediaType> = accept
			.split(',')
			.filter_map(|value| MediaType::parse(value.trim()))
			.collect();
		let json_api: Vec<&MediaType> = offered
			.iter()
			.filter(|media_type| media_type.is_json_api())
			.collect();
		if !json_api.is_empty() && json_api.iter().all(|media_type| media_type.has_parameters()) {
			debug!(accept, "unacceptable media type");
			return Err(NegotiationError::MediaTypeUnacceptable {
				media_type: accept.trim().to_string(),
			});
		}

		Ok(())
	}

	/// Reject top-level query parameters the protocol does not recognize,
	/// one error per offending key.
	pub fn validate_query_params(
		&self,
		request: &JsonApiRequest,
	) -> Result<(), Vec<NegotiationError>> {
		let errors: Vec<NegotiationError> = request
			.unrecognized_query_params()
			.into_iter()
			.map(|param| NegotiationError::QueryParamUnrecognized {
				param: param.to_string(),
			})
			.collect();

		if errors.is_empty() {
			Ok(())
		} else {
			debug!(count = errors.len(), "unrecognized query parameters");
			Err(errors)
		}
	}

	/// Lint the raw request body. An empty or blank body passes; anything
	/// else must be well-formed JSON.
	pub fn lint_body(&self, body: &str) -> Result<(), NegotiationError> {
		lint(body).map_err(|message| NegotiationError::RequestBodyInvalidJson {
			message,
			original: self.include_original_body.then(|| body.to_string()),
		})
	}
}

/// Validates outbound responses; a malformed response body is a server
/// fault and renders with status 500.
#[derive(Debug, Clone)]
pub struct ResponseValidator {
	include_original_body: bool,
}

impl Default for ResponseValidator {
	fn default() -> Self {
		Self {
			include_original_body: true,
		}
	}
}

impl ResponseValidator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn include_original_body(mut self, enabled: bool) -> Self {
		self.include_original_body = enabled;
		self
	}

	/// Lint the raw response body before it leaves the server.
	pub fn lint_body(&self, body: &str) -> Result<(), NegotiationError> {
		lint(body).map_err(|message| NegotiationError::ResponseBodyInvalidJson {
			message,
			original: self.include_original_body.then(|| body.to_string()),
		})
	}
}

fn lint(body: &str) -> Result<(), String> {
	if body.trim().is_empty() {
		return Ok(());
	}
	match serde_json::from_str::<serde_json::Value>(body) {
		Ok(_) => Ok(()),
		Err(error) => Err(error.to_string()),
	}
}
