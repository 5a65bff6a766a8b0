//! Writing manifests into the output tree.

use std::{fs, io, path::Path, path::PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::yaml;

#[derive(Debug, Error)]
pub enum WriteError {
	#[error("failed to create directory {}", path.display())]
	CreateDir {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to serialize manifest for {}", path.display())]
	Serialize {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("failed to write {}", path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Write `document` as the only document in the file at `path`, creating parent directories.
pub fn write_manifest(path: &Path, document: &JsonValue) -> Result<(), WriteError> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
			path: parent.to_path_buf(),
			source,
		})?;
	}

	let content = yaml::to_document(document).map_err(|source| WriteError::Serialize {
		path: path.to_path_buf(),
		source,
	})?;

	fs::write(path, content).map_err(|source| WriteError::Write {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_write_manifest_creates_parents() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("a/b/c.yaml");

		write_manifest(&path, &json!({ "kind": "ConfigMap" })).unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "---\nkind: ConfigMap\n");
	}

	#[test]
	fn test_write_manifest_overwrites() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("c.yaml");

		write_manifest(&path, &json!({ "kind": "ConfigMap" })).unwrap();
		write_manifest(&path, &json!({ "kind": "Secret" })).unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "---\nkind: Secret\n");
	}
}
