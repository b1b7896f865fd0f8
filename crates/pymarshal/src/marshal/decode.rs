use crate::marshal::value::{Dict, Unsupported, Value};
use crate::marshal::{Cursor, Endianness, MarshalError, Result, Tag, scan_records};

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting; the top-level record sits at depth 0.
	pub max_depth: u32,
	/// Byte order of `BINARY_FLOAT` payloads.
	pub float_byte_order: Endianness,
	/// Fail on invalid UTF-8 instead of substituting U+FFFD.
	pub strict_utf8: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			float_byte_order: Endianness::Little,
			strict_utf8: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects malformed text.
	pub fn strict() -> Self {
		Self {
			strict_utf8: true,
			..Self::default()
		}
	}
}

/// Decode the first top-level record of `bytes`.
pub fn decode_buffer(bytes: &[u8]) -> Result<Value> {
	decode_buffer_with(bytes, &DecodeOptions::default())
}

/// Decode the first top-level record of `bytes` with explicit options.
pub fn decode_buffer_with(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	Cursor::new(bytes).decode_with(opt)
}

/// Decode every concatenated top-level record of `bytes`.
pub fn decode_all(bytes: &[u8], opt: &DecodeOptions) -> Result<Vec<Value>> {
	Ok(scan_records(bytes, opt)?.into_iter().map(|record| record.value).collect())
}

impl Cursor<'_> {
	/// Decode the next top-level record with default options.
	///
	/// Returns [`Value::Absent`] once the buffer is exhausted.
	pub fn decode(&mut self) -> Result<Value> {
		self.decode_with(&DecodeOptions::default())
	}

	/// Decode the next top-level record.
	///
	/// Returns [`Value::Absent`] once the buffer is exhausted.
	pub fn decode_with(&mut self, opt: &DecodeOptions) -> Result<Value> {
		if !self.has_more() {
			return Ok(Value::Absent);
		}
		decode_record(self, opt, 0)
	}
}

fn decode_record(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if depth > opt.max_depth {
		return Err(MarshalError::DepthExceeded { max_depth: opt.max_depth });
	}

	let at = cursor.position();
	let byte = cursor.read_u8()?;
	let tag = Tag::from_byte(byte).ok_or(MarshalError::UnknownTag { tag: byte, at })?;

	match tag {
		Tag::Null => Ok(Value::Absent),
		Tag::None => Ok(Value::None),
		Tag::False => Ok(Value::Bool(false)),
		Tag::True => Ok(Value::Bool(true)),
		Tag::Int => Ok(Value::Int(cursor.read_i32_le()?)),
		Tag::BinaryFloat => Ok(Value::Float(cursor.read_f64(opt.float_byte_order)?)),
		Tag::Float => read_float_text(cursor).map(Value::Float),
		Tag::String | Tag::Interned => {
			let len = read_len(cursor)?;
			let text = read_text(cursor, len, opt)?;
			if tag == Tag::Interned {
				cursor.intern(text.clone());
			}
			Ok(Value::String(text))
		}
		Tag::StringRef => {
			let index = cursor.read_u32_le()?;
			Ok(Value::String(cursor.intern_lookup(index)?.into()))
		}
		Tag::Tuple | Tag::List | Tag::FrozenSet => {
			let count = read_len(cursor)?;
			// Items missing before the declared count are an error, unlike dict entries.
			// Every item needs at least its tag byte.
			let mut items = Vec::with_capacity(count.min(cursor.remaining()));
			for _ in 0..count {
				items.push(decode_record(cursor, opt, depth + 1)?);
			}
			Ok(Value::List(items))
		}
		Tag::Dict => decode_dict(cursor, opt, depth),
		Tag::StopIter | Tag::Ellipsis | Tag::Int64 | Tag::Complex | Tag::BinaryComplex | Tag::Long => read_unsupported(cursor, tag),
	}
}

/// Read entries until a non-string key. The end of the buffer reads as an
/// absent key or value, so a dict missing its terminator still decodes.
fn decode_dict(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let mut dict = Dict::new();
	loop {
		let Value::String(key) = decode_entry(cursor, opt, depth + 1)? else {
			break;
		};
		let value = decode_entry(cursor, opt, depth + 1)?;
		dict.insert(key, value);
	}
	Ok(Value::Dict(dict))
}

fn decode_entry(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if !cursor.has_more() {
		return Ok(Value::Absent);
	}
	decode_record(cursor, opt, depth)
}

/// Consume the payload of a tag without a native model and keep its raw bytes.
fn read_unsupported(cursor: &mut Cursor<'_>, tag: Tag) -> Result<Value> {
	let start = cursor.position();
	match tag {
		Tag::Int64 => {
			cursor.read_slice(8)?;
		}
		Tag::BinaryComplex => {
			cursor.read_slice(16)?;
		}
		Tag::Complex => {
			for _ in 0..2 {
				let len = usize::from(cursor.read_u8()?);
				cursor.read_slice(len)?;
			}
		}
		Tag::Long => {
			let digits = cursor.read_i32_le()?.unsigned_abs();
			let overflow = MarshalError::LengthOverflow { len: u64::from(digits) };
			let len = usize::try_from(digits)
				.ok()
				.and_then(|digits| digits.checked_mul(2))
				.ok_or(overflow)?;
			cursor.read_slice(len)?;
		}
		_ => {}
	}

	Ok(Value::Unsupported(Unsupported {
		tag,
		payload: cursor.consumed_since(start).to_vec(),
	}))
}

fn read_len(cursor: &mut Cursor<'_>) -> Result<usize> {
	let len = cursor.read_u32_le()?;
	usize::try_from(len).map_err(|_| MarshalError::LengthOverflow { len: u64::from(len) })
}

fn read_text(cursor: &mut Cursor<'_>, len: usize, opt: &DecodeOptions) -> Result<Box<str>> {
	let at = cursor.position();
	let raw = cursor.read_slice(len)?;
	if opt.strict_utf8 {
		return std::str::from_utf8(raw)
			.map(Into::into)
			.map_err(|err| MarshalError::InvalidUtf8 { at: at + err.valid_up_to() });
	}
	Ok(String::from_utf8_lossy(raw).into())
}

fn read_float_text(cursor: &mut Cursor<'_>) -> Result<f64> {
	let len = usize::from(cursor.read_u8()?);
	let at = cursor.position();
	let raw = cursor.read_slice(len)?;
	let text = String::from_utf8_lossy(raw);
	text.trim().parse::<f64>().map_err(|_| MarshalError::InvalidFloatLiteral {
		text: text.into_owned(),
		at,
	})
}

#[cfg(test)]
mod tests;
