//! Decide where each manifest belongs in the output tree.
//!
//! Cluster-scoped resources go to `cluster/<plural kind>[.<group>]/<name>.yaml`,
//! namespaced resources to `namespaces/<namespace>/<kind>[.<group>]-<name>.yaml`.

use std::{
	collections::{BTreeSet, HashSet},
	path::{Path, PathBuf},
};

use k8s::{GroupVersionKind, ParseApiVersionError, ResourceScope};
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
	manifest::{self, AccessError},
	output::{self, WriteError},
	registry::{RegistryError, ScopeRegistry},
};

/// Directory for cluster-scoped resources, relative to the output directory.
pub const CLUSTER_DIR: &str = "cluster";
/// Directory for namespaced resources, relative to the output directory.
pub const NAMESPACED_DIR: &str = "namespaces";
/// Namespace assumed for namespaced resources that do not set one.
pub const DEFAULT_NAMESPACE: &str = "default";

const EXTENSION: &str = "yaml";

#[derive(Debug, Error)]
pub enum PlacementError {
	#[error(transparent)]
	Access(#[from] AccessError),

	#[error(transparent)]
	ApiVersion(#[from] ParseApiVersionError),

	#[error(transparent)]
	Registry(#[from] RegistryError),

	#[error("namespace field should not be set for cluster-scoped resource: {kind}/{name}")]
	NamespaceOnClusterScoped { kind: String, name: String },

	#[error("{field} {value:?} cannot be used in an output path")]
	UnsafePathComponent { field: &'static str, value: String },

	#[error(transparent)]
	Write(#[from] WriteError),
}

#[derive(Debug, Clone, Default)]
pub struct PlacementOpts {
	/// `Kind` or `Kind.group` tokens; matching manifests are dropped.
	pub filter_kind_groups: Vec<String>,
	/// Strip `metadata.namespace` from cluster-scoped resources instead of failing.
	pub clean: bool,
}

/// Pluralise a lowercase kind the way Kubernetes names its resources.
pub fn pluralise(lowercase_kind: &str) -> String {
	// e.g. ingress
	if lowercase_kind.ends_with('s') {
		return format!("{lowercase_kind}es");
	}
	// e.g. networkpolicy
	if let Some(stem) = lowercase_kind.strip_suffix("cy") {
		return format!("{stem}cies");
	}
	format!("{lowercase_kind}s")
}

/// Reject values that would leave their directory once joined into a path.
fn check_path_component(field: &'static str, value: &str) -> Result<(), PlacementError> {
	if value == "." || value == ".." || value.contains(['/', '\\']) {
		return Err(PlacementError::UnsafePathComponent {
			field,
			value: value.to_owned(),
		});
	}
	Ok(())
}

/// Path of a cluster-scoped resource relative to the output directory.
pub fn cluster_scoped_path(gvk: &GroupVersionKind, name: &str, core_group: bool) -> PathBuf {
	let plural = pluralise(&gvk.kind.to_lowercase());
	let subdirectory = if core_group {
		plural
	} else {
		format!("{plural}.{}", gvk.group)
	};
	[CLUSTER_DIR, &subdirectory, &format!("{name}.{EXTENSION}")]
		.iter()
		.collect()
}

/// Path of a namespaced resource relative to the output directory.
pub fn namespaced_path(
	gvk: &GroupVersionKind,
	namespace: &str,
	name: &str,
	core_group: bool,
) -> PathBuf {
	let kind = gvk.kind.to_lowercase();
	let file_name = if core_group {
		format!("{kind}-{name}.{EXTENSION}")
	} else {
		format!("{kind}.{}-{name}.{EXTENSION}", gvk.group)
	};
	[NAMESPACED_DIR, namespace, &file_name].iter().collect()
}

/// Places manifests one at a time and remembers the namespaces they use.
pub struct PlacementEngine<'r> {
	registry: &'r dyn ScopeRegistry,
	output_dir: PathBuf,
	opts: PlacementOpts,
	namespaces: BTreeSet<String>,
	written: HashSet<PathBuf>,
}

impl<'r> PlacementEngine<'r> {
	pub fn new(registry: &'r dyn ScopeRegistry, output_dir: &Path, opts: PlacementOpts) -> Self {
		Self {
			registry,
			output_dir: output_dir.to_path_buf(),
			opts,
			namespaces: BTreeSet::new(),
			written: HashSet::new(),
		}
	}

	fn is_filtered(&self, gvk: &GroupVersionKind) -> bool {
		let group_kind = gvk.group_kind().to_string();
		self.opts
			.filter_kind_groups
			.iter()
			.any(|filter| *filter == group_kind)
	}

	/// Compute the destination of `document`, or `None` if it is filtered out.
	///
	/// With `clean` set, a namespace on a cluster-scoped resource is removed
	/// from `document`. Namespaced resources record their namespace.
	pub fn place(&mut self, document: &mut JsonValue) -> Result<Option<PathBuf>, PlacementError> {
		let api_version = manifest::api_version(document)?;
		let kind = manifest::kind(document)?;
		let gvk = GroupVersionKind::from_api_version(&api_version, &kind)?;

		if self.is_filtered(&gvk) {
			trace!(group_kind = %gvk.group_kind(), "skipping filtered resource");
			return Ok(None);
		}

		let name = manifest::name(document)?;
		check_path_component("name", &name)?;
		let namespace = manifest::namespace(document)?;
		if let Some(namespace) = &namespace {
			check_path_component("namespace", namespace)?;
		}
		let core_group = self.registry.is_core_group(&gvk.group);

		let relative = match self.registry.scope(&gvk)? {
			ResourceScope::ClusterWide => {
				if let Some(namespace) = namespace {
					if !self.opts.clean {
						return Err(PlacementError::NamespaceOnClusterScoped {
							kind: kind.to_lowercase(),
							name,
						});
					}
					debug!(%gvk, %name, %namespace, "removing namespace from cluster-scoped resource");
					manifest::clear_namespace(document);
				}
				cluster_scoped_path(&gvk, &name, core_group)
			}
			ResourceScope::Namespaced => {
				let namespace = namespace.unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned());
				let path = namespaced_path(&gvk, &namespace, &name, core_group);
				self.namespaces.insert(namespace);
				path
			}
		};

		Ok(Some(self.output_dir.join(relative)))
	}

	/// Place `document` and write it to its destination.
	pub fn place_and_write(
		&mut self,
		mut document: JsonValue,
	) -> Result<Option<PathBuf>, PlacementError> {
		let Some(path) = self.place(&mut document)? else {
			return Ok(None);
		};

		if !self.written.insert(path.clone()) {
			warn!(path = %path.display(), "overwriting manifest written earlier in this run");
		}
		output::write_manifest(&path, &document)?;
		debug!(path = %path.display(), "wrote manifest");

		Ok(Some(path))
	}

	/// Namespaces used by the namespaced resources placed so far.
	pub fn namespaces(&self) -> &BTreeSet<String> {
		&self.namespaces
	}
}
