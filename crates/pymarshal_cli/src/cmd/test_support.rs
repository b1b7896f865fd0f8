use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use pymarshal_testkit::{fixture_path as shared_fixture_path, workspace_root};

static PYMARSHAL_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_pymarshal(args: &[&str]) -> Output {
	Command::new(pymarshal_bin()).args(args).output().expect("pymarshal command executes")
}

fn pymarshal_bin() -> &'static PathBuf {
	PYMARSHAL_BIN.get_or_init(resolve_pymarshal_bin)
}

fn resolve_pymarshal_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_pymarshal") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"));

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "pymarshal.exe" } else { "pymarshal" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "pymarshal"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build pymarshal binary at {}", bin.display());

	bin
}
