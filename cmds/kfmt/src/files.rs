use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

fn is_yaml(path: &Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| YAML_EXTENSIONS.contains(&ext))
}

/// Recursively list YAML files under `dir`, in a stable order.
///
/// Only regular files with a `.yaml` or `.yml` extension are returned.
/// Symlinks are not followed.
pub fn list_yaml_files(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
	let mut files = Vec::new();
	for entry in WalkDir::new(dir).sort_by_file_name() {
		let entry = entry?;
		if entry.file_type().is_file() && is_yaml(entry.path()) {
			trace!(path = %entry.path().display(), "found input file");
			files.push(entry.into_path());
		}
	}
	Ok(files)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn test_list_yaml_files() {
		let dir = tempfile::tempdir().unwrap();
		let root = dir.path();
		fs::create_dir_all(root.join("nested/deeper")).unwrap();
		fs::create_dir_all(root.join("dir.yaml")).unwrap();
		for file in [
			"b.yaml",
			"a.yml",
			"notes.txt",
			"Makefile",
			"nested/c.yaml",
			"nested/deeper/d.YAML",
			"nested/deeper/e.yaml",
		] {
			fs::write(root.join(file), "").unwrap();
		}

		let files: Vec<_> = list_yaml_files(root)
			.unwrap()
			.into_iter()
			.map(|path| path.strip_prefix(root).unwrap().to_path_buf())
			.collect();

		assert_eq!(
			files,
			vec![
				PathBuf::from("a.yml"),
				PathBuf::from("b.yaml"),
				PathBuf::from("nested/c.yaml"),
				PathBuf::from("nested/deeper/e.yaml"),
			]
		);
	}

	#[test]
	fn test_missing_directory() {
		let dir = tempfile::tempdir().unwrap();
		assert!(list_yaml_files(&dir.path().join("missing")).is_err());
	}
}
