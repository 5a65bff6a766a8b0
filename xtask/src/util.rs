use std::{fs, path::Path};

use anyhow::{Context as _, Result};

/// Checks that the `file` has the specified `contents`. If that is not the
/// case, updates the file.
pub fn ensure_file_contents(file: &Path, contents: &str) -> Result<()> {
	if let Ok(old_contents) = fs::read_to_string(file) {
		if normalize_newlines(&old_contents) == normalize_newlines(contents) {
			// File is already up to date.
			return Ok(());
		}
	}

	eprintln!(" {} was not up-to-date, updating\n", file.display());
	if std::env::var("CI").is_ok() {
		eprintln!("NOTE: run `cargo xtask gen-builtin-scopes` locally and commit the updated files\n");
	}
	if let Some(parent) = file.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create {}", parent.display()))?;
	}
	fs::write(file, contents).with_context(|| format!("failed to write {}", file.display()))
}

// Eww, someone configured git to use crlf?
fn normalize_newlines(s: &str) -> String {
	s.replace("\r\n", "\n")
}
