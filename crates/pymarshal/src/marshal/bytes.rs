use crate::marshal::{MarshalError, Result, Tag};

/// Byte order of multi-byte payloads whose layout is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
	/// Least significant byte first.
	#[default]
	Little,
	/// Most significant byte first.
	Big,
}

impl Endianness {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Little => "little",
			Self::Big => "big",
		}
	}
}

/// Sequential reader over one marshal buffer.
///
/// A cursor is one decode session: concatenated top-level records read through
/// the same cursor share its intern table, so a string reference may point at a
/// string interned by an earlier record.
#[derive(Debug)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
	interned: Vec<Box<str>>,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0 with an empty intern table.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self {
			bytes,
			pos: 0,
			interned: Vec::new(),
		}
	}

	/// Return current byte offset.
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Return total buffer length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return true when the underlying buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Return true while unread bytes remain.
	pub fn has_more(&self) -> bool {
		self.pos < self.bytes.len()
	}

	/// Return the current offset and move forward by `n` bytes.
	///
	/// No bounds check happens here; the typed reads check before advancing.
	pub fn advance(&mut self, n: usize) -> usize {
		let at = self.pos;
		self.pos = self.pos.saturating_add(n);
		at
	}

	/// Read exactly `len` bytes and advance past them.
	pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
		if len > self.remaining() {
			return Err(MarshalError::UnexpectedEof {
				at: self.pos,
				need: len,
				rem: self.remaining(),
			});
		}

		let start = self.advance(len);
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a fixed-size array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_slice(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read one signed byte.
	pub fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read an IEEE-754 double using the selected byte order.
	pub fn read_f64(&mut self, endianness: Endianness) -> Result<f64> {
		let raw = self.read_array::<8>()?;
		Ok(match endianness {
			Endianness::Little => f64::from_le_bytes(raw),
			Endianness::Big => f64::from_be_bytes(raw),
		})
	}

	/// Return the bytes consumed since `start`.
	pub(crate) fn consumed_since(&self, start: usize) -> &'a [u8] {
		let end = self.pos.min(self.bytes.len());
		&self.bytes[start.min(end)..end]
	}

	/// Append a string to the intern table and return its index.
	pub fn intern(&mut self, text: Box<str>) -> usize {
		self.interned.push(text);
		self.interned.len() - 1
	}

	/// Resolve a string reference against the intern table.
	pub fn intern_lookup(&self, index: u32) -> Result<&str> {
		usize::try_from(index)
			.ok()
			.and_then(|idx| self.interned.get(idx))
			.map(|text| &**text)
			.ok_or(MarshalError::UnresolvedStringRef {
				index,
				len: self.interned.len(),
			})
	}

	/// Number of strings interned so far.
	pub fn intern_len(&self) -> usize {
		self.interned.len()
	}
}

/// Growable output buffer used while encoding.
#[derive(Debug, Default, Clone)]
pub struct Writer {
	bytes: Vec<u8>,
}

impl Writer {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Return current write offset.
	pub fn position(&self) -> usize {
		self.bytes.len()
	}

	/// Append one tag byte.
	pub fn write_tag(&mut self, tag: Tag) {
		self.bytes.push(tag.as_byte());
	}

	/// Append one byte.
	pub fn write_u8(&mut self, value: u8) {
		self.bytes.push(value);
	}

	/// Append a little-endian `u32`.
	pub fn write_u32_le(&mut self, value: u32) {
		self.bytes.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `i32`.
	pub fn write_i32_le(&mut self, value: i32) {
		self.bytes.extend_from_slice(&value.to_le_bytes());
	}

	/// Append an IEEE-754 double using the selected byte order.
	pub fn write_f64(&mut self, value: f64, endianness: Endianness) {
		let raw = match endianness {
			Endianness::Little => value.to_le_bytes(),
			Endianness::Big => value.to_be_bytes(),
		};
		self.bytes.extend_from_slice(&raw);
	}

	/// Append raw bytes.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.bytes.extend_from_slice(bytes);
	}

	/// Borrow everything written so far.
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Consume the writer and return its buffer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}
}
