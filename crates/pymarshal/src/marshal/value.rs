use std::collections::HashMap;

use crate::marshal::{MarshalError, Tag};

/// Runtime value produced by decoding and consumed by encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Null record or end of stream. Encodes as `None`.
	Absent,
	/// Python `None`.
	None,
	/// Boolean scalar.
	Bool(bool),
	/// 32-bit signed integer.
	Int(i32),
	/// 64-bit float.
	///
	/// A finite float with no fractional part that fits in `i32` encodes as an
	/// `INT` record and decodes back as [`Value::Int`].
	Float(f64),
	/// UTF-8 text.
	String(Box<str>),
	/// Ordered sequence; tuples and frozensets decode here too.
	List(Vec<Value>),
	/// String-keyed mapping in insertion order.
	Dict(Dict),
	/// Recognized tag with no native model.
	Unsupported(Unsupported),
}

impl Value {
	/// Stable lowercase kind label.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Absent => "absent",
			Self::None => "none",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::String(_) => "string",
			Self::List(_) => "list",
			Self::Dict(_) => "dict",
			Self::Unsupported(_) => "unsupported",
		}
	}

	/// True for the absent marker.
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	/// Borrow text content.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text.as_ref()),
			_ => None,
		}
	}

	/// Return boolean content.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Return integer content.
	pub fn as_i32(&self) -> Option<i32> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Return numeric content, widening integers.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Int(value) => Some(f64::from(*value)),
			Self::Float(value) => Some(*value),
			_ => None,
		}
	}

	/// Borrow list items.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items.as_slice()),
			_ => None,
		}
	}

	/// Borrow dict entries.
	pub fn as_dict(&self) -> Option<&Dict> {
		match self {
			Self::Dict(dict) => Some(dict),
			_ => None,
		}
	}

	/// Look up a dict entry by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_dict().and_then(|dict| dict.get(key))
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(value)
	}
}

impl TryFrom<i64> for Value {
	type Error = MarshalError;

	fn try_from(value: i64) -> Result<Self, Self::Error> {
		i32::try_from(value)
			.map(Self::Int)
			.map_err(|_| MarshalError::IntegerOutOfRange { value: i128::from(value) })
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::List(value)
	}
}

impl From<Dict> for Value {
	fn from(value: Dict) -> Self {
		Self::Dict(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::None, Into::into)
	}
}

/// Placeholder for a recognized tag this codec does not model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
	/// Tag that introduced the record.
	pub tag: Tag,
	/// Every payload byte following the tag.
	pub payload: Vec<u8>,
}

impl Unsupported {
	/// Symbolic tag name.
	pub fn name(&self) -> &'static str {
		self.tag.name()
	}
}

/// Ordered string-keyed map.
///
/// Inserting an existing key replaces its value in place, keeping the
/// position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
	entries: Vec<(Box<str>, Value)>,
	index: HashMap<Box<str>, usize>,
}

impl Dict {
	/// Create an empty dict.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or replace an entry, returning the previous value.
	pub fn insert(&mut self, key: impl Into<Box<str>>, value: Value) -> Option<Value> {
		let key = key.into();
		if let Some(&slot) = self.index.get(&key) {
			return Some(std::mem::replace(&mut self.entries[slot].1, value));
		}

		self.index.insert(key.clone(), self.entries.len());
		self.entries.push((key, value));
		None
	}

	/// Look up a value by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.index.get(key).map(|&slot| &self.entries[slot].1)
	}

	/// True when `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.index.contains_key(key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when the dict holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(key, value)| (key.as_ref(), value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(key, _)| key.as_ref())
	}
}

impl<K: Into<Box<str>>> FromIterator<(K, Value)> for Dict {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		let mut dict = Self::new();
		for (key, value) in iter {
			dict.insert(key, value);
		}
		dict
	}
}
