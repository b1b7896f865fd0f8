use std::fmt::Write as _;
use std::path::Path;

use pymarshal::marshal::{DecodeOptions, Endianness};

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}

/// Read an input file, mapping failures to the library IO error.
pub(crate) fn read_input(path: &Path) -> pymarshal::marshal::Result<Vec<u8>> {
	Ok(std::fs::read(path)?)
}

/// Render bytes as lowercase hex.
pub(crate) fn hex(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		let _ = write!(out, "{byte:02x}");
	}
	out
}

/// Build decode options from shared command flags.
pub(crate) fn decode_options(max_depth: Option<u32>, big_endian_floats: bool, strict_utf8: bool) -> DecodeOptions {
	let mut opt = if strict_utf8 { DecodeOptions::strict() } else { DecodeOptions::default() };
	if let Some(max_depth) = max_depth {
		opt.max_depth = max_depth;
	}
	if big_endian_floats {
		opt.float_byte_order = Endianness::Big;
	}
	opt
}
