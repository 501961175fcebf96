//! Inclusion paths
//!
//! The `include` query parameter is a comma-separated list of dot-delimited
//! relationship paths. A requested path includes every relationship along
//! it: `include=author.comments` includes `author` at depth 0 and
//! `author.comments` below it.
//!
//! An absent parameter means "use the caller's defaults". An empty
//! parameter (`include=`) is observed legacy behavior and also means
//! "use defaults"; set [`IncludePaths::empty_means_defaults`] to `false`
//! to treat it as "include nothing" instead.

use std::collections::HashSet;

/// Client-requested inclusion paths.
#[derive(Debug, Clone)]
pub struct IncludePaths {
	param: Option<String>,
	paths: HashSet<String>,
	empty_means_defaults: bool,
}

impl IncludePaths {
	/// The request carried no `include` parameter.
	pub fn absent() -> Self {
		Self {
			param: None,
			paths: HashSet::new(),
			empty_means_defaults: true,
		}
	}

	/// Parse the raw value of the `include` parameter.
	pub fn parse(param: &str) -> Self {
		let paths = param
			.split(',')
			.map(str::trim)
			.filter(|path| !path.is_empty())
			.map(str::to_string)
			.collect();
		Self {
			param: Some(param.to_string()),
			paths,
			empty_means_defaults: true,
		}
	}

	/// Treat `include=` as "include nothing" instead of "use defaults".
	pub fn empty_means_defaults(mut self, enabled: bool) -> Self {
		self.empty_means_defaults = enabled;
		self
	}

	/// Whether the parameter appeared in the request at all.
	pub fn is_present(&self) -> bool {
		self.param.is_some()
	}

	pub fn paths(&self) -> &HashSet<String> {
		&self.paths
	}

	fn use_defaults(&self) -> bool {
		match &self.param {
			None => true,
			Some(param) => param.is_empty() && self.empty_means_defaults,
		}
	}

	/// Whether the relationship at `full_path` is requested, either
	/// directly or as a prefix of a deeper requested path. Client paths
	/// take precedence; `default_paths` is consulted only when the client
	/// supplied none.
	pub fn includes_path(&self, full_path: &str, default_paths: &HashSet<String>) -> bool {
		let requested = if self.use_defaults() {
			default_paths
		} else {
			&self.paths
		};
		requested
			.iter()
			.any(|path| path == full_path || path.starts_with(&format!("{}.", full_path)))
	}
}

impl Default for IncludePaths {
	fn default() -> Self {
		Self::absent()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn defaults(paths: &[&str]) -> HashSet<String> {
		paths.iter().map(|p| p.to_string()).collect()
	}

	#[test]
	fn test_direct_path_is_included() {
		let includes = IncludePaths::parse("author,comments");
		assert!(includes.includes_path("author", &HashSet::new()));
		assert!(includes.includes_path("comments", &HashSet::new()));
		assert!(!includes.includes_path("tags", &HashSet::new()));
	}

	#[test]
	fn test_deep_path_includes_every_prefix() {
		let includes = IncludePaths::parse("author.comments.votes");
		assert!(includes.includes_path("author", &HashSet::new()));
		assert!(includes.includes_path("author.comments", &HashSet::new()));
		assert!(includes.includes_path("author.comments.votes", &HashSet::new()));
		assert!(!includes.includes_path("comments", &HashSet::new()));
	}

	#[test]
	fn test_prefix_matching_requires_dot_boundary() {
		let includes = IncludePaths::parse("authors");
		assert!(!includes.includes_path("author", &HashSet::new()));
	}

	#[test]
	fn test_absent_param_uses_defaults() {
		let includes = IncludePaths::absent();
		assert!(includes.includes_path("comments", &defaults(&["comments"])));
		assert!(!includes.includes_path("author", &defaults(&["comments"])));
	}

	#[test]
	fn test_empty_param_uses_defaults() {
		let includes = IncludePaths::parse("");
		assert!(includes.includes_path("comments", &defaults(&["comments"])));
	}

	#[test]
	fn test_empty_param_strict_mode_includes_nothing() {
		let includes = IncludePaths::parse("").empty_means_defaults(false);
		assert!(!includes.includes_path("comments", &defaults(&["comments"])));
	}

	#[test]
	fn test_client_paths_take_precedence_over_defaults() {
		let includes = IncludePaths::parse("author");
		assert!(includes.includes_path("author", &defaults(&["comments"])));
		assert!(!includes.includes_path("comments", &defaults(&["comments"])));
	}

	#[test]
	fn test_defaults_matched_with_path_semantics() {
		let includes = IncludePaths::absent();
		assert!(includes.includes_path("author", &defaults(&["author.comments"])));
	}
}
