//! Hyperlinks and opaque metadata
//!
//! Links resolve relative hrefs against a base URI at serialization time.
//! Every holder of links or metadata carries these values directly as
//! fields; there is no shared mixin.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Opaque, insertion-ordered metadata attached to documents, resources,
/// relationships, links and errors.
pub type Meta = IndexMap<String, Value>;

/// A single hyperlink with optional metadata.
///
/// # Examples
///
/// ```
/// use nuages_schema::Link;
///
/// let link = Link::new("/articles/1");
/// assert_eq!(link.resolve("http://example.com/api"), "http://example.com/api/articles/1");
///
/// let absolute = Link::new("http://example.com/api/users");
/// assert_eq!(absolute.resolve("http://other.org"), "http://example.com/api/users");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
	pub href: String,
	pub meta: Meta,
}

impl Link {
	pub fn new(href: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			meta: Meta::new(),
		}
	}

	pub fn with_meta(href: impl Into<String>, meta: Meta) -> Self {
		Self {
			href: href.into(),
			meta,
		}
	}

	/// Resolve the href against a base URI. Hrefs that already carry a
	/// scheme are returned unchanged.
	pub fn resolve(&self, base_uri: &str) -> String {
		if self.href.contains("://") {
			self.href.clone()
		} else {
			format!("{}{}", base_uri, self.href)
		}
	}

	/// The serialized form of this link: a bare string when there is no
	/// metadata, otherwise an object with `href` and `meta` members.
	pub fn to_value(&self, base_uri: &str) -> Value {
		if self.meta.is_empty() {
			return Value::String(self.resolve(base_uri));
		}
		let meta: serde_json::Map<String, Value> =
			self.meta.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
		let mut object = serde_json::Map::new();
		object.insert("href".to_string(), Value::String(self.resolve(base_uri)));
		object.insert("meta".to_string(), Value::Object(meta));
		Value::Object(object)
	}
}

/// A named collection of links sharing one base URI.
///
/// Serializes as a map of link name to resolved link object, so a
/// `Links` value can be embedded directly in a document, resource or
/// relationship member.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Links {
	base_uri: String,
	links: IndexMap<String, Link>,
}

impl Links {
	pub fn new(base_uri: impl Into<String>) -> Self {
		Self {
			base_uri: base_uri.into(),
			links: IndexMap::new(),
		}
	}

	pub fn base_uri(&self) -> &str {
		&self.base_uri
	}

	pub fn is_empty(&self) -> bool {
		self.links.is_empty()
	}

	/// Add a link under an arbitrary name.
	pub fn link(mut self, name: impl Into<String>, link: Link) -> Self {
		self.links.insert(name.into(), link);
		self
	}

	/// The `self` link of the owning entity.
	pub fn self_link(self, link: Link) -> Self {
		self.link("self", link)
	}

	pub fn related(self, link: Link) -> Self {
		self.link("related", link)
	}

	pub fn first(self, link: Link) -> Self {
		self.link("first", link)
	}

	pub fn last(self, link: Link) -> Self {
		self.link("last", link)
	}

	pub fn prev(self, link: Link) -> Self {
		self.link("prev", link)
	}

	pub fn next(self, link: Link) -> Self {
		self.link("next", link)
	}

	pub fn get(&self, name: &str) -> Option<&Link> {
		self.links.get(name)
	}

	/// Resolve every link against the base URI, preserving insertion order.
	pub fn transform(&self) -> IndexMap<String, Value> {
		self.links
			.iter()
			.map(|(name, link)| (name.clone(), link.to_value(&self.base_uri)))
			.collect()
	}
}

impl Serialize for Links {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let resolved = self.transform();
		let mut map = serializer.serialize_map(Some(resolved.len()))?;
		for (name, value) in &resolved {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}
