//! Generates `crates/k8s/src/builtin/table.rs` from a k8s.io/api checkout.
//!
//! Every API package has a `register.go` naming its group and version and a
//! `types.go` whose client-generated types are marked with `// +genclient`.
//! Types also marked `// +genclient:nonNamespaced` are cluster-scoped.

use std::{
	collections::BTreeMap,
	fs,
	path::{Path, PathBuf},
};

use anyhow::{bail, Context as _, Result};
use itertools::Itertools;
use walkdir::WalkDir;

use crate::util::ensure_file_contents;

const GROUP_NAME_PREFIX: &str = "const GroupName = \"";
const GROUP_NAME_SUFFIX: &str = "\"";
const VERSION_PREFIX: &str =
	"var SchemeGroupVersion = schema.GroupVersion{Group: GroupName, Version: \"";
const VERSION_SUFFIX: &str = "\"}";

const GENCLIENT_MARKER: &str = "// +genclient";
const NON_NAMESPACED_MARKER: &str = "// +genclient:nonNamespaced";

fn table_path() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("../crates/k8s/src/builtin/table.rs")
}

/// Find the first line shaped `{prefix}value{suffix}` and return the value.
fn extract_between<'a>(content: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
	content
		.lines()
		.find_map(|line| line.strip_prefix(prefix)?.strip_suffix(suffix))
}

/// Read group and version from a package's `register.go`.
fn parse_register(content: &str) -> Option<(&str, &str)> {
	let group = extract_between(content, GROUP_NAME_PREFIX, GROUP_NAME_SUFFIX)?;
	let version = extract_between(content, VERSION_PREFIX, VERSION_SUFFIX)?;
	Some((group, version))
}

/// Kinds declared in a `types.go` with whether each is namespaced.
fn parse_types(content: &str) -> Result<Vec<(&str, bool)>> {
	let mut kinds = Vec::new();
	let mut lines = content.lines();

	while let Some(line) = lines.next() {
		if line.trim_end() != GENCLIENT_MARKER {
			continue;
		}

		let mut namespaced = true;
		let mut kind = None;
		for line in lines.by_ref() {
			let line = line.trim_end();
			if line == NON_NAMESPACED_MARKER {
				namespaced = false;
			} else if let Some(declaration) = line.strip_prefix("type ") {
				kind = declaration.split_whitespace().next();
				break;
			} else if !line.is_empty() && !line.starts_with("//") {
				break;
			}
		}

		let Some(kind) = kind else {
			bail!("no type declaration follows {GENCLIENT_MARKER}");
		};
		kinds.push((kind, namespaced));
	}

	Ok(kinds)
}

fn api_version(group: &str, version: &str) -> String {
	if group.is_empty() {
		version.to_owned()
	} else {
		format!("{group}/{version}")
	}
}

/// Collect `{apiVersion}/{Kind}` -> namespaced for every package under `api_dir`.
fn collect_scopes(api_dir: &Path) -> Result<BTreeMap<String, bool>> {
	let mut scopes = BTreeMap::new();

	for entry in WalkDir::new(api_dir).sort_by_file_name() {
		let entry = entry.with_context(|| format!("failed to walk {}", api_dir.display()))?;
		if !entry.file_type().is_file() || entry.file_name() != "types.go" {
			continue;
		}
		let types_path = entry.path();
		let register_path = types_path.with_file_name("register.go");

		let register = fs::read_to_string(&register_path)
			.with_context(|| format!("failed to read {}", register_path.display()))?;
		let Some((group, version)) = parse_register(&register) else {
			bail!("no group version found in {}", register_path.display());
		};

		let types = fs::read_to_string(types_path)
			.with_context(|| format!("failed to read {}", types_path.display()))?;
		let kinds = parse_types(&types)
			.with_context(|| format!("failed to parse {}", types_path.display()))?;

		for (kind, namespaced) in kinds {
			scopes.insert(format!("{}/{kind}", api_version(group, version)), namespaced);
		}
	}

	if scopes.is_empty() {
		bail!("no API types found under {}", api_dir.display());
	}
	Ok(scopes)
}

fn render(scopes: &BTreeMap<String, bool>) -> String {
	let entries = scopes
		.iter()
		.map(|(key, namespaced)| format!("\t\"{key}\" => {namespaced},\n"))
		.join("");
	format!(
		"//! Generated by `cargo xtask gen-builtin-scopes`; do not edit by hand.\n\
		\n\
		/// Whether each built-in kind is namespaced, keyed by `{{apiVersion}}/{{Kind}}`.\n\
		pub(super) static BUILTIN_SCOPES: phf::Map<&'static str, bool> = phf::phf_map! {{\n\
		{entries}\
		}};\n"
	)
}

pub fn generate(api_dir: &Path) -> Result<()> {
	let scopes = collect_scopes(api_dir)?;
	eprintln!("found {} built-in kinds", scopes.len());
	ensure_file_contents(&table_path(), &render(&scopes))
}

#[cfg(test)]
mod tests {
	use indoc::indoc;

	use super::*;

	const REGISTER: &str = indoc! {r#"
		package v1

		// GroupName is the group name use in this package
		const GroupName = "rbac.authorization.k8s.io"

		// SchemeGroupVersion is group version used to register these objects
		var SchemeGroupVersion = schema.GroupVersion{Group: GroupName, Version: "v1"}
	"#};

	const TYPES: &str = indoc! {"
		package v1

		// +genclient
		// +k8s:deepcopy-gen:interfaces=k8s.io/apimachinery/pkg/runtime.Object

		// Role is a namespaced, logical grouping of PolicyRules.
		type Role struct {
			metav1.TypeMeta `json:\",inline\"`
		}

		// RoleList is a collection of Roles
		type RoleList struct {
		}

		// +genclient
		// +genclient:nonNamespaced
		// +k8s:deepcopy-gen:interfaces=k8s.io/apimachinery/pkg/runtime.Object

		// ClusterRole is a cluster level, logical grouping of PolicyRules.
		type ClusterRole struct {
		}
	"};

	#[test]
	fn test_parse_register() {
		assert_eq!(
			parse_register(REGISTER),
			Some(("rbac.authorization.k8s.io", "v1"))
		);
		assert_eq!(parse_register("package v1\n"), None);
	}

	#[test]
	fn test_parse_types() {
		assert_eq!(
			parse_types(TYPES).unwrap(),
			vec![("Role", true), ("ClusterRole", false)]
		);
	}

	#[test]
	fn test_genclient_without_type() {
		assert!(parse_types("// +genclient\nfunc init() {}\n").is_err());
	}

	#[test]
	fn test_collect_and_render() {
		let dir = tempfile::tempdir().unwrap();
		let rbac = dir.path().join("rbac/v1");
		let core = dir.path().join("core/v1");
		fs::create_dir_all(&rbac).unwrap();
		fs::create_dir_all(&core).unwrap();
		fs::write(rbac.join("register.go"), REGISTER).unwrap();
		fs::write(rbac.join("types.go"), TYPES).unwrap();
		fs::write(
			core.join("register.go"),
			"const GroupName = \"\"\nvar SchemeGroupVersion = schema.GroupVersion{Group: GroupName, Version: \"v1\"}\n",
		)
		.unwrap();
		fs::write(
			core.join("types.go"),
			"// +genclient\n// +genclient:nonNamespaced\ntype Namespace struct {\n}\n",
		)
		.unwrap();

		let scopes = collect_scopes(dir.path()).unwrap();
		assert_eq!(
			render(&scopes),
			indoc! {r#"
				//! Generated by `cargo xtask gen-builtin-scopes`; do not edit by hand.

				/// Whether each built-in kind is namespaced, keyed by `{apiVersion}/{Kind}`.
				pub(super) static BUILTIN_SCOPES: phf::Map<&'static str, bool> = phf::phf_map! {
					"rbac.authorization.k8s.io/v1/ClusterRole" => false,
					"rbac.authorization.k8s.io/v1/Role" => true,
					"v1/Namespace" => false,
				};
			"#}
		);
	}

	#[test]
	fn test_missing_register_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("types.go"), TYPES).unwrap();
		assert!(collect_scopes(dir.path()).is_err());
	}
}
