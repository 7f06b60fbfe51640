use indexmap::IndexMap;

/// Decoded YAML node.
///
/// Scalars are always text: the decoder never resolves `1`, `true` or `null`
/// to numbers, booleans or an absent marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	/// Text leaf.
	Scalar(String),
	/// Insertion-ordered key/value pairs.
	Mapping(Mapping),
	/// Ordered list of nodes.
	Sequence(Vec<Value>),
}

impl Value {
	/// Empty text scalar, the value of a key or item with nothing after it.
	pub fn empty() -> Self {
		Self::Scalar(String::new())
	}

	/// Stable lowercase label of the node kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::Mapping(_) => "mapping",
			Self::Sequence(_) => "sequence",
		}
	}

	/// Borrow scalar text.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Scalar(text) => Some(text),
			_ => None,
		}
	}

	/// Borrow mapping payload.
	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Self::Mapping(map) => Some(map),
			_ => None,
		}
	}

	/// Borrow sequence items.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Look up `key` when this node is a mapping.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_mapping().and_then(|map| map.get(key))
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Self::Scalar(text.to_owned())
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Self::Scalar(text)
	}
}

impl From<Mapping> for Value {
	fn from(map: Mapping) -> Self {
		Self::Mapping(map)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Sequence(items)
	}
}

/// Mapping with keys kept in source order.
///
/// Equality compares entries pairwise in order, so two mappings with the same
/// pairs in a different order are not equal.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
	entries: IndexMap<String, Value>,
}

impl Mapping {
	/// Create an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the mapping has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Look up one key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Iterate entries in source order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Iterate keys in source order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Iterate values in source order.
	pub fn values(&self) -> impl Iterator<Item = &Value> {
		self.entries.values()
	}

	/// Insert or replace; a replaced key keeps its first position.
	/// Returns the previous value.
	pub(crate) fn insert(&mut self, key: String, value: Value) -> Option<Value> {
		self.entries.insert(key, value)
	}
}

impl PartialEq for Mapping {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}

impl Eq for Mapping {}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		for (key, value) in iter {
			map.insert(key.into(), value.into());
		}
		map
	}
}

impl IntoIterator for Mapping {
	type Item = (String, Value);
	type IntoIter = indexmap::map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a Mapping {
	type Item = (&'a String, &'a Value);
	type IntoIter = indexmap::map::Iter<'a, String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::{Mapping, Value};

	#[test]
	fn mapping_equality_is_order_sensitive() {
		let left: Mapping = [("a", "1"), ("b", "2")].into_iter().collect();
		let right: Mapping = [("b", "2"), ("a", "1")].into_iter().collect();
		assert_ne!(left, right);
		assert_eq!(left, Mapping::from_iter([("a", "1"), ("b", "2")]));
	}

	#[test]
	fn replaced_key_keeps_first_position() {
		let mut map = Mapping::new();
		map.insert("a".into(), "1".into());
		map.insert("b".into(), "2".into());
		let previous = map.insert("a".into(), "3".into());

		assert_eq!(previous, Some(Value::from("1")));
		assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
		assert_eq!(map.get("a").and_then(Value::as_str), Some("3"));
	}

	#[test]
	fn accessors_match_variant() {
		let value = Value::Sequence(vec!["x".into()]);
		assert_eq!(value.kind(), "sequence");
		assert!(value.as_str().is_none());
		assert_eq!(value.as_sequence().map(<[Value]>::len), Some(1));
		assert!(value.get("x").is_none());
	}
}
