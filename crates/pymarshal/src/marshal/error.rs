use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MarshalError>;

/// Errors produced while reading or writing marshal data.
#[derive(Debug, Error)]
pub enum MarshalError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Tag byte is not part of the recognized tag table.
	#[error("unknown tag 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Raw tag byte.
		tag: u8,
		/// Offset of the tag byte.
		at: usize,
	},
	/// String reference points outside the intern table.
	#[error("unresolved string reference {index} (intern table holds {len})")]
	UnresolvedStringRef {
		/// Requested table index.
		index: u32,
		/// Number of interned strings at lookup time.
		len: usize,
	},
	/// Value has no wire representation.
	#[error("value has no marshal representation: {kind}")]
	UnsupportedValue {
		/// Logical kind of the rejected value.
		kind: &'static str,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Container nesting exceeded configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Integer does not fit the 32-bit `INT` record.
	#[error("integer {value} out of 32-bit range")]
	IntegerOutOfRange {
		/// Offending integer.
		value: i128,
	},
	/// Legacy textual float did not parse.
	#[error("invalid float literal {text:?} at offset {at}")]
	InvalidFloatLiteral {
		/// Text as read from the stream.
		text: String,
		/// Offset of the text payload.
		at: usize,
	},
	/// Strict decoding met bytes that are not UTF-8.
	#[error("invalid utf-8 at offset {at}")]
	InvalidUtf8 {
		/// Offset of the first invalid byte.
		at: usize,
	},
	/// String or sequence is too long for a 4-byte length prefix.
	#[error("length {len} does not fit a 32-bit length prefix")]
	LengthOverflow {
		/// Offending length.
		len: u64,
	},
}
