mod bytes;
mod decode;
mod encode;
mod error;
mod scan;
mod tag;
mod value;

/// Byte cursor, output writer, and byte-order marker.
pub use bytes::{Cursor, Endianness, Writer};
/// Decode entry points and options.
pub use decode::{DecodeOptions, decode_all, decode_buffer, decode_buffer_with};
/// Encode entry points and options.
pub use encode::{EncodeOptions, FloatFormat, encode_into, encode_value, encode_value_with};
/// Error and result aliases.
pub use error::{MarshalError, Result};
/// Top-level record listing.
pub use scan::{Record, scan_records};
/// Wire tag table.
pub use tag::Tag;
/// Decoded runtime value types.
pub use value::{Dict, Unsupported, Value};
