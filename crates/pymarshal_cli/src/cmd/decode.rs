use std::path::PathBuf;

use pymarshal::marshal::{Cursor, Value};

use crate::cmd::CmdResult;
use crate::cmd::json::value_to_json;
use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{decode_options, emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Decode every concatenated record instead of only the first.
	#[arg(long)]
	pub all: bool,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	/// Read `g` float payloads as big-endian.
	#[arg(long = "big-endian-floats")]
	pub big_endian_floats: bool,
	#[arg(long = "strict-utf8")]
	pub strict_utf8: bool,
}

/// Decode marshal records from a file and print them.
pub fn run(args: Args) -> CmdResult {
	let Args {
		path,
		all,
		json,
		max_depth,
		big_endian_floats,
		strict_utf8,
	} = args;

	let bytes = read_input(&path)?;
	let opt = decode_options(max_depth, big_endian_floats, strict_utf8);

	let mut cursor = Cursor::new(&bytes);
	let mut values = vec![cursor.decode_with(&opt)?];
	while all && cursor.has_more() {
		values.push(cursor.decode_with(&opt)?);
	}

	if json {
		print_json(&path, all, &values);
		return Ok(());
	}

	for (idx, value) in values.iter().enumerate() {
		if all {
			println!("# record {idx}");
		}
		print_value(value, PrintOptions::default());
	}
	Ok(())
}

fn print_json(path: &std::path::Path, all: bool, values: &[Value]) {
	let mut records = values.iter().map(value_to_json);
	let payload = if all {
		DecodeJson {
			path: path.display().to_string(),
			value: None,
			values: Some(records.collect()),
		}
	} else {
		DecodeJson {
			path: path.display().to_string(),
			value: Some(records.next().unwrap_or(serde_json::Value::Null)),
			values: None,
		}
	};

	emit_json(&payload);
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	value: Option<serde_json::Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	values: Option<Vec<serde_json::Value>>,
}
