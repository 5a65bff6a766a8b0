//! Mock Kubernetes API discovery types.

use std::collections::BTreeMap;

use k8s::ResourceScope;

/// Discovery mode for the mock server.
#[derive(Debug, Clone, Copy, Default)]
pub enum DiscoveryMode {
	/// Support aggregated discovery (APIGroupDiscoveryList).
	#[default]
	Aggregated,
	/// Return 406 for aggregated discovery, forcing fallback to legacy endpoints.
	Legacy,
}

/// Resources the mock server advertises.
#[derive(Debug, Clone)]
pub struct MockDiscovery {
	/// Resources of the core group, served at `v1`.
	pub core_resources: Vec<MockApiResource>,
	/// Resources of named groups, keyed by group version (e.g. `apps/v1`).
	pub group_resources: BTreeMap<String, Vec<MockApiResource>>,
}

impl MockDiscovery {
	/// Add resources served under `group_version`.
	#[must_use]
	pub fn with_group_resources(
		mut self,
		group_version: &str,
		resources: impl IntoIterator<Item = MockApiResource>,
	) -> Self {
		self.group_resources
			.entry(group_version.to_owned())
			.or_default()
			.extend(resources);
		self
	}

	/// Group versions per group, in the order the server lists them.
	pub(crate) fn groups(&self) -> BTreeMap<&str, Vec<(&str, &[MockApiResource])>> {
		let mut groups: BTreeMap<&str, Vec<_>> = BTreeMap::new();
		for (group_version, resources) in &self.group_resources {
			let (group, version) = split_group_version(group_version);
			groups
				.entry(group)
				.or_default()
				.push((version, resources.as_slice()));
		}
		groups
	}
}

impl Default for MockDiscovery {
	fn default() -> Self {
		Self {
			core_resources: vec![
				MockApiResource::namespaced("configmaps", "ConfigMap"),
				MockApiResource::namespaced("secrets", "Secret"),
				MockApiResource::namespaced("services", "Service"),
				MockApiResource::namespaced("pods", "Pod"),
				MockApiResource::cluster_scoped("namespaces", "Namespace"),
				MockApiResource::cluster_scoped("persistentvolumes", "PersistentVolume"),
			],
			group_resources: BTreeMap::from([
				(
					"apps/v1".to_string(),
					vec![
						MockApiResource::namespaced("deployments", "Deployment"),
						MockApiResource::namespaced("statefulsets", "StatefulSet"),
						MockApiResource::namespaced("daemonsets", "DaemonSet"),
					],
				),
				(
					"rbac.authorization.k8s.io/v1".to_string(),
					vec![
						MockApiResource::namespaced("roles", "Role"),
						MockApiResource::cluster_scoped("clusterroles", "ClusterRole"),
					],
				),
			]),
		}
	}
}

/// Split `group/version`; a bare version belongs to the core group.
pub(crate) fn split_group_version(group_version: &str) -> (&str, &str) {
	group_version
		.split_once('/')
		.unwrap_or(("", group_version))
}

/// A mock API resource definition.
#[derive(Debug, Clone)]
pub struct MockApiResource {
	/// Plural resource name, e.g. `deployments`.
	pub name: String,
	pub kind: String,
	pub scope: ResourceScope,
}

impl MockApiResource {
	pub fn new(name: &str, kind: &str, scope: ResourceScope) -> Self {
		Self {
			name: name.to_string(),
			kind: kind.to_string(),
			scope,
		}
	}

	pub fn namespaced(name: &str, kind: &str) -> Self {
		Self::new(name, kind, ResourceScope::Namespaced)
	}

	pub fn cluster_scoped(name: &str, kind: &str) -> Self {
		Self::new(name, kind, ResourceScope::ClusterWide)
	}

	/// Scope as spelled by aggregated discovery.
	pub(crate) fn scope_name(&self) -> &'static str {
		match self.scope {
			ResourceScope::Namespaced => "Namespaced",
			ResourceScope::ClusterWide => "Cluster",
		}
	}
}
