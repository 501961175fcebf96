//! Boundary validation of inbound requests: media-type negotiation,
//! query-parameter recognition and body linting.

use nuages_negotiation::{error_document_for, NegotiationError, RequestValidator};
use nuages_request::JsonApiRequest;
use rstest::rstest;

const JSON_API: &str = "application/vnd.api+json";

#[rstest]
#[case(JSON_API)]
#[case("text/html; charset=utf-8")]
fn test_negotiate_valid_content_types(#[case] content_type: &str) {
	let validator = RequestValidator::new();
	assert!(validator.negotiate(content_type, JSON_API).is_ok());
}

#[rstest]
#[case("application/vnd.api+json; charset=utf-8")]
#[case("application/vnd.api+json; ext=\"ext1,ext2\"")]
fn test_negotiate_unsupported_content_types(#[case] content_type: &str) {
	let validator = RequestValidator::new();
	let error = validator.negotiate(content_type, JSON_API).unwrap_err();
	assert!(matches!(error, NegotiationError::MediaTypeUnsupported { .. }));
	assert_eq!(error.status(), 415);
}

#[rstest]
#[case("application/vnd.api+json; charset=utf-8")]
#[case("application/vnd.api+json; ext=\"ext1,ext2\"")]
fn test_negotiate_unacceptable_accept_headers(#[case] accept: &str) {
	let validator = RequestValidator::new();
	let error = validator.negotiate(JSON_API, accept).unwrap_err();
	assert!(matches!(error, NegotiationError::MediaTypeUnacceptable { .. }));
	assert_eq!(error.status(), 406);
}

#[test]
fn test_recognized_query_params_pass() {
	let validator = RequestValidator::new();
	let request = JsonApiRequest::from_query_str(
		"",
		"fields%5Bfoo%5D=bar&include=baz&sort=asc&page=1&filter=search",
	);
	assert!(validator.validate_query_params(&request).is_ok());
}

#[test]
fn test_unrecognized_query_param_is_rejected() {
	let validator = RequestValidator::new();
	let request = JsonApiRequest::from_query_str("", "foo=bar");
	let errors = validator.validate_query_params(&request).unwrap_err();

	assert_eq!(errors.len(), 1);
	assert_eq!(
		errors[0].to_string(),
		"Query parameter 'foo' can't be recognized!"
	);
}

#[test]
fn test_one_error_per_offending_key() {
	let validator = RequestValidator::new();
	let request = JsonApiRequest::from_query_str("", "foo=bar&include=author&baz=1");
	let errors = validator.validate_query_params(&request).unwrap_err();

	assert_eq!(errors.len(), 2);
	let document = error_document_for(errors);
	assert_eq!(document.status_code(None), 400);
	assert_eq!(
		document.errors[0].source.as_ref().unwrap().parameter.as_deref(),
		Some("foo")
	);
	assert_eq!(
		document.errors[1].source.as_ref().unwrap().parameter.as_deref(),
		Some("baz")
	);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("{}")]
#[case(
	"{\"employees\":[\
	{\"firstName\":\"John\", \"lastName\":\"Doe\"},\
	{\"firstName\":\"Anna\", \"lastName\":\"Smith\"},\
	{\"firstName\":\"Peter\", \"lastName\":\"Jones\"}\
	]}"
)]
fn test_lint_accepts_empty_or_valid_bodies(#[case] body: &str) {
	let validator = RequestValidator::new();
	assert!(validator.lint_body(body).is_ok());
}

#[rstest]
#[case("{abc")]
#[case("{\u{FEFF}}")]
fn test_lint_rejects_invalid_bodies(#[case] body: &str) {
	let validator = RequestValidator::new();
	let error = validator.lint_body(body).unwrap_err();
	assert_eq!(error.status(), 400);

	let document = error.error_document();
	assert_eq!(
		document.errors[0].meta.get("original"),
		Some(&serde_json::Value::String(body.to_string()))
	);
}
