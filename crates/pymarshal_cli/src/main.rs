#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "pymarshal", about = "Python marshal inspection and conversion tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode records and print them as text or JSON.
	Decode(cmd::decode::Args),
	/// Encode a JSON document as one marshal record.
	Encode(cmd::encode::Args),
	/// List top-level records with offsets and tags.
	Info(cmd::info::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::CmdResult {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}
