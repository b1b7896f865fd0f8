use crate::marshal::{Endianness, MarshalError, Result, Tag, Value, Writer};

/// Longest legacy float text; the length travels in a single byte.
const MAX_FLOAT_TEXT: usize = 254;

/// Wire form used for non-integral floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatFormat {
	/// `f` record: length-prefixed decimal text.
	#[default]
	Text,
	/// `g` record: 8 raw IEEE-754 bytes.
	Binary,
}

/// Behavior switches for encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum container nesting; the top-level value sits at depth 0.
	pub max_depth: u32,
	/// Record kind for non-integral floats.
	pub float_format: FloatFormat,
	/// Byte order of `BINARY_FLOAT` payloads.
	pub float_byte_order: Endianness,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			float_format: FloatFormat::Text,
			float_byte_order: Endianness::Little,
		}
	}
}

/// Encode one value into a fresh buffer.
pub fn encode_value(value: &Value) -> Result<Vec<u8>> {
	encode_value_with(value, &EncodeOptions::default())
}

/// Encode one value into a fresh buffer with explicit options.
pub fn encode_value_with(value: &Value, opt: &EncodeOptions) -> Result<Vec<u8>> {
	let mut writer = Writer::new();
	encode_into(&mut writer, value, opt)?;
	Ok(writer.into_bytes())
}

/// Append the encoding of one value to `writer`.
///
/// Repeated calls produce concatenated top-level records.
pub fn encode_into(writer: &mut Writer, value: &Value, opt: &EncodeOptions) -> Result<()> {
	encode_record(writer, value, opt, 0)
}

fn encode_record(writer: &mut Writer, value: &Value, opt: &EncodeOptions, depth: u32) -> Result<()> {
	if depth > opt.max_depth {
		return Err(MarshalError::DepthExceeded { max_depth: opt.max_depth });
	}

	match value {
		Value::Absent | Value::None => writer.write_tag(Tag::None),
		Value::Bool(true) => writer.write_tag(Tag::True),
		Value::Bool(false) => writer.write_tag(Tag::False),
		Value::Int(number) => write_int(writer, *number),
		Value::Float(number) => write_float(writer, *number, opt),
		Value::String(text) => write_string(writer, text)?,
		Value::List(items) => {
			writer.write_tag(Tag::List);
			writer.write_u32_le(len_prefix(items.len())?);
			for item in items {
				encode_record(writer, item, opt, depth + 1)?;
			}
		}
		Value::Dict(dict) => {
			writer.write_tag(Tag::Dict);
			for (key, item) in dict.iter() {
				write_string(writer, key)?;
				encode_record(writer, item, opt, depth + 1)?;
			}
			writer.write_tag(Tag::Null);
		}
		Value::Unsupported(unsupported) => return Err(MarshalError::UnsupportedValue { kind: unsupported.name() }),
	}
	Ok(())
}

fn write_int(writer: &mut Writer, number: i32) {
	writer.write_tag(Tag::Int);
	writer.write_i32_le(number);
}

fn write_float(writer: &mut Writer, number: f64, opt: &EncodeOptions) {
	if let Some(int) = integral_i32(number) {
		write_int(writer, int);
		return;
	}

	match opt.float_format {
		FloatFormat::Text => write_float_text(writer, &float_text(number)),
		FloatFormat::Binary => {
			writer.write_tag(Tag::BinaryFloat);
			writer.write_f64(number, opt.float_byte_order);
		}
	}
}

fn write_string(writer: &mut Writer, text: &str) -> Result<()> {
	writer.write_tag(Tag::String);
	writer.write_u32_le(len_prefix(text.len())?);
	writer.write_bytes(text.as_bytes());
	Ok(())
}

/// Write an `f` record, cutting the text to what a one-byte length can carry.
pub(crate) fn write_float_text(writer: &mut Writer, text: &str) {
	let raw = &text.as_bytes()[..text.len().min(MAX_FLOAT_TEXT)];
	writer.write_tag(Tag::Float);
	writer.write_u8(raw.len() as u8);
	writer.write_bytes(raw);
}

/// Shortest round-trip decimal text, exponent form outside `[1e-6, 1e21)`.
pub(crate) fn float_text(number: f64) -> String {
	if number.is_nan() {
		return "nan".to_owned();
	}
	if number.is_infinite() {
		return if number > 0.0 { "inf" } else { "-inf" }.to_owned();
	}

	let magnitude = number.abs();
	if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
		format!("{number:e}")
	} else {
		format!("{number}")
	}
}

fn integral_i32(number: f64) -> Option<i32> {
	if !number.is_finite() || number.fract() != 0.0 {
		return None;
	}
	if number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
		return None;
	}
	Some(number as i32)
}

fn len_prefix(len: usize) -> Result<u32> {
	u32::try_from(len).map_err(|_| MarshalError::LengthOverflow {
		len: u64::try_from(len).unwrap_or(u64::MAX),
	})
}
