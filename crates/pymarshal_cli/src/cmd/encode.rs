use std::io::Write as _;
use std::path::PathBuf;

use pymarshal::marshal::{EncodeOptions, Endianness, FloatFormat, encode_value_with};

use crate::cmd::CmdResult;
use crate::cmd::json::value_from_json;
use crate::cmd::util::read_input;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document to encode.
	pub input: PathBuf,
	/// Output file; raw bytes go to stdout when omitted.
	#[arg(long = "out", short = 'o')]
	pub out: Option<PathBuf>,
	/// Write non-integral floats as `g` records instead of decimal text.
	#[arg(long = "binary-floats")]
	pub binary_floats: bool,
	#[arg(long = "big-endian-floats")]
	pub big_endian_floats: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Convert a JSON document into one marshal record.
pub fn run(args: Args) -> CmdResult {
	let Args {
		input,
		out,
		binary_floats,
		big_endian_floats,
		max_depth,
	} = args;

	let json: serde_json::Value = serde_json::from_slice(&read_input(&input)?)?;
	let value = value_from_json(&json)?;

	let mut opt = EncodeOptions::default();
	if binary_floats {
		opt.float_format = FloatFormat::Binary;
	}
	if big_endian_floats {
		opt.float_byte_order = Endianness::Big;
	}
	if let Some(max_depth) = max_depth {
		opt.max_depth = max_depth;
	}

	let bytes = encode_value_with(&value, &opt)?;
	match out {
		Some(path) => std::fs::write(path, &bytes)?,
		None => {
			let mut stdout = std::io::stdout().lock();
			stdout.write_all(&bytes)?;
			stdout.flush()?;
		}
	}
	Ok(())
}
