//! Namespace manifests for namespaces that resources were placed into.

use std::{collections::BTreeSet, path::Path, path::PathBuf};

use k8s::GroupVersionKind;
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::{
	output::{self, WriteError},
	placement,
};

fn namespace_gvk() -> GroupVersionKind {
	GroupVersionKind::gvk("", "v1", "Namespace")
}

fn namespace_manifest(name: &str) -> JsonValue {
	json!({
		"apiVersion": "v1",
		"kind": "Namespace",
		"metadata": { "name": name },
	})
}

/// Write a Namespace manifest for every namespace without one in `output_dir`.
///
/// Existing manifests are never touched. Returns the paths that were created.
pub fn create_missing_namespaces(
	output_dir: &Path,
	namespaces: &BTreeSet<String>,
) -> Result<Vec<PathBuf>, WriteError> {
	let gvk = namespace_gvk();
	let mut created = Vec::new();
	for namespace in namespaces {
		let path = output_dir.join(placement::cluster_scoped_path(&gvk, namespace, true));
		if path.exists() {
			continue;
		}
		output::write_manifest(&path, &namespace_manifest(namespace))?;
		debug!(%namespace, path = %path.display(), "created namespace manifest");
		created.push(path);
	}
	Ok(created)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use indoc::indoc;

	use super::*;

	#[test]
	fn test_create_missing_namespaces() {
		let dir = tempfile::tempdir().unwrap();
		let namespaces = BTreeSet::from(["default".to_owned(), "prod".to_owned()]);

		let created = create_missing_namespaces(dir.path(), &namespaces).unwrap();

		assert_eq!(
			created,
			vec![
				dir.path().join("cluster/namespaces/default.yaml"),
				dir.path().join("cluster/namespaces/prod.yaml"),
			]
		);
		assert_eq!(
			fs::read_to_string(&created[1]).unwrap(),
			indoc! {"
				---
				apiVersion: v1
				kind: Namespace
				metadata:
				  name: prod
			"}
		);
	}

	#[test]
	fn test_existing_namespace_is_kept() {
		let dir = tempfile::tempdir().unwrap();
		let existing = dir.path().join("cluster/namespaces/prod.yaml");
		fs::create_dir_all(existing.parent().unwrap()).unwrap();
		fs::write(&existing, "custom").unwrap();

		let created =
			create_missing_namespaces(dir.path(), &BTreeSet::from(["prod".to_owned()])).unwrap();

		assert!(created.is_empty());
		assert_eq!(fs::read_to_string(existing).unwrap(), "custom");
	}

	#[test]
	fn test_no_namespaces() {
		let dir = tempfile::tempdir().unwrap();
		assert!(create_missing_namespaces(dir.path(), &BTreeSet::new())
			.unwrap()
			.is_empty());
		assert!(!dir.path().join("cluster").exists());
	}
}
