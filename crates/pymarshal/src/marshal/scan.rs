use crate::marshal::{Cursor, DecodeOptions, Result, Tag, Value};

/// One decoded top-level record and where it sits in the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
	/// Offset of the record's tag byte.
	pub offset: usize,
	/// Encoded length in bytes, tag included.
	pub len: usize,
	/// Tag of the record.
	pub tag: Tag,
	/// Decoded value.
	pub value: Value,
}

/// Decode every concatenated top-level record in `bytes` through one cursor.
pub fn scan_records(bytes: &[u8], opt: &DecodeOptions) -> Result<Vec<Record>> {
	let mut cursor = Cursor::new(bytes);
	let mut out = Vec::new();

	while cursor.has_more() {
		let offset = cursor.position();
		let value = cursor.decode_with(opt)?;
		// decode_with already rejected unknown tags.
		let tag = Tag::from_byte(bytes[offset]).unwrap_or(Tag::Null);
		out.push(Record {
			offset,
			len: cursor.position() - offset,
			tag,
			value,
		});
	}

	Ok(out)
}
