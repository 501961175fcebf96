//! Media type parsing

/// The JSON:API media type; registered without parameters.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// A parsed media type with its parameters.
///
/// # Examples
///
/// ```
/// use nuages_negotiation::MediaType;
///
/// let media_type = MediaType::parse("application/vnd.api+json; charset=utf-8").unwrap();
/// assert!(media_type.is_json_api());
/// assert!(media_type.has_parameters());
/// assert_eq!(media_type.essence(), "application/vnd.api+json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
	pub main_type: String,
	pub subtype: String,
	pub parameters: Vec<(String, String)>,
}

impl MediaType {
	/// Parses a single media type value, e.g. one element of an Accept
	/// header. Returns `None` when the `type/subtype` essence is malformed.
	pub fn parse(value: &str) -> Option<Self> {
		let mut segments = value.split(';');
		let essence = segments.next()?.trim();
		let (main_type, subtype) = essence.split_once('/')?;
		if main_type.is_empty() || subtype.is_empty() {
			return None;
		}

		let parameters = segments
			.filter_map(|segment| {
				let (name, value) = segment.split_once('=')?;
				Some((
					name.trim().to_ascii_lowercase(),
					value.trim().trim_matches('"').to_string(),
				))
			})
			.collect();

		Some(Self {
			main_type: main_type.to_ascii_lowercase(),
			subtype: subtype.to_ascii_lowercase(),
			parameters,
		})
	}

	/// The `type/subtype` pair without parameters.
	pub fn essence(&self) -> String {
		format!("{}/{}", self.main_type, self.subtype)
	}

	pub fn is_json_api(&self) -> bool {
		self.essence() == JSON_API_MEDIA_TYPE
	}

	pub fn has_parameters(&self) -> bool {
		!self.parameters.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_bare_media_type() {
		let media_type = MediaType::parse("application/vnd.api+json").unwrap();
		assert!(media_type.is_json_api());
		assert!(!media_type.has_parameters());
	}

	#[test]
	fn test_parse_with_parameters() {
		let media_type = MediaType::parse("text/html; charset=utf-8").unwrap();
		assert!(!media_type.is_json_api());
		assert_eq!(
			media_type.parameters,
			vec![("charset".to_string(), "utf-8".to_string())]
		);
	}

	#[test]
	fn test_quoted_parameter_value_is_unquoted() {
		let media_type = MediaType::parse("application/vnd.api+json; ext=\"ext1,ext2\"").unwrap();
		assert_eq!(
			media_type.parameters,
			vec![("ext".to_string(), "ext1,ext2".to_string())]
		);
	}

	#[test]
	fn test_case_insensitive_essence() {
		let media_type = MediaType::parse("Application/VND.API+JSON").unwrap();
		assert!(media_type.is_json_api());
	}

	#[test]
	fn test_malformed_values_do_not_parse() {
		assert!(MediaType::parse("").is_none());
		assert!(MediaType::parse("texthtml").is_none());
		assert!(MediaType::parse("/html").is_none());
		assert!(MediaType::parse("text/").is_none());
	}
}
