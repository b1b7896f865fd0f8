use pymarshal::marshal::{Dict, MarshalError, Value};
use serde_json::{Map, Number};

use crate::cmd::util::hex;

/// Convert a decoded value into JSON.
///
/// Absent and none both become `null`. Unsupported records become a one-entry
/// object keyed by `$` plus the tag name with the hex payload as its value.
pub fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Absent | Value::None => serde_json::Value::Null,
		Value::Bool(flag) => serde_json::Value::Bool(*flag),
		Value::Int(number) => serde_json::Value::Number(Number::from(*number)),
		Value::Float(number) => Number::from_f64(*number)
			.map(serde_json::Value::Number)
			.unwrap_or_else(|| serde_json::Value::String(number.to_string())),
		Value::String(text) => serde_json::Value::String(text.to_string()),
		Value::List(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
		Value::Dict(dict) => {
			let mut map = Map::new();
			for (key, item) in dict.iter() {
				map.insert(key.to_owned(), value_to_json(item));
			}
			serde_json::Value::Object(map)
		}
		Value::Unsupported(item) => {
			let mut map = Map::new();
			map.insert(format!("${}", item.name()), serde_json::Value::String(hex(&item.payload)));
			serde_json::Value::Object(map)
		}
	}
}

/// Convert a JSON document into a value ready for encoding.
///
/// Integers must fit 32 bits; other numbers become floats.
pub fn value_from_json(json: &serde_json::Value) -> pymarshal::marshal::Result<Value> {
	Ok(match json {
		serde_json::Value::Null => Value::None,
		serde_json::Value::Bool(flag) => Value::Bool(*flag),
		serde_json::Value::Number(number) => number_from_json(number)?,
		serde_json::Value::String(text) => Value::from(text.as_str()),
		serde_json::Value::Array(items) => Value::List(items.iter().map(value_from_json).collect::<pymarshal::marshal::Result<_>>()?),
		serde_json::Value::Object(map) => {
			let mut dict = Dict::new();
			for (key, item) in map {
				dict.insert(key.as_str(), value_from_json(item)?);
			}
			Value::Dict(dict)
		}
	})
}

fn number_from_json(number: &Number) -> pymarshal::marshal::Result<Value> {
	if let Some(int) = number.as_i64() {
		return Value::try_from(int);
	}
	if let Some(wide) = number.as_u64() {
		return Err(MarshalError::IntegerOutOfRange { value: i128::from(wide) });
	}
	Ok(Value::Float(number.as_f64().unwrap_or(f64::NAN)))
}
