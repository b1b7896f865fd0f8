use std::path::PathBuf;

use pymarshal::marshal::scan_records;

use crate::cmd::CmdResult;
use crate::cmd::util::{decode_options, emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "big-endian-floats")]
	pub big_endian_floats: bool,
}

/// List every top-level record in a marshal file.
pub fn run(args: Args) -> CmdResult {
	let Args { path, json, big_endian_floats } = args;

	let bytes = read_input(&path)?;
	let records = scan_records(&bytes, &decode_options(None, big_endian_floats, false))?;

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			size: bytes.len(),
			records: records
				.iter()
				.enumerate()
				.map(|(index, record)| RecordJson {
					index,
					offset: record.offset,
					len: record.len,
					tag: record.tag.name(),
					kind: record.value.kind(),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("size: {}", bytes.len());
	println!("records: {}", records.len());
	println!("idx\toffset\tlen\ttag\tkind");
	for (index, record) in records.iter().enumerate() {
		println!("{}\t{}\t{}\t{}\t{}", index, record.offset, record.len, record.tag, record.value.kind());
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct RecordJson {
	index: usize,
	offset: usize,
	len: usize,
	tag: &'static str,
	kind: &'static str,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	size: usize,
	records: Vec<RecordJson>,
}
