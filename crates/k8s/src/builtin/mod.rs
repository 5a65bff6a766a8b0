//! Scopes of the resource kinds that ship with Kubernetes.
//!
//! The table is generated from the `k8s.io/api` sources by
//! `cargo xtask gen-builtin-scopes` and checked in.

mod table;

use table::BUILTIN_SCOPES;

use crate::{GroupVersionKind, ResourceScope};

fn table_key(gvk: &GroupVersionKind) -> String {
	format!("{}/{}", gvk.api_version(), gvk.kind)
}

/// Look up the scope of a built-in kind by exact group, version and kind.
pub fn lookup(gvk: &GroupVersionKind) -> Option<ResourceScope> {
	BUILTIN_SCOPES
		.get(table_key(gvk).as_str())
		.copied()
		.map(ResourceScope::from_namespaced)
}

/// Iterate over every built-in kind and its scope.
pub fn entries() -> impl Iterator<Item = (GroupVersionKind, ResourceScope)> {
	BUILTIN_SCOPES.entries().filter_map(|(key, namespaced)| {
		let (api_version, kind) = key.rsplit_once('/')?;
		let gvk = GroupVersionKind::from_api_version(api_version, kind).ok()?;
		Some((gvk, ResourceScope::from_namespaced(*namespaced)))
	})
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("", "v1", "Pod", ResourceScope::Namespaced)]
	#[case("", "v1", "Namespace", ResourceScope::ClusterWide)]
	#[case("apps", "v1", "Deployment", ResourceScope::Namespaced)]
	#[case("networking.k8s.io", "v1", "NetworkPolicy", ResourceScope::Namespaced)]
	#[case("networking.k8s.io", "v1", "IngressClass", ResourceScope::ClusterWide)]
	#[case(
		"rbac.authorization.k8s.io",
		"v1",
		"ClusterRole",
		ResourceScope::ClusterWide
	)]
	#[case(
		"apiextensions.k8s.io",
		"v1",
		"CustomResourceDefinition",
		ResourceScope::ClusterWide
	)]
	fn test_lookup(
		#[case] group: &str,
		#[case] version: &str,
		#[case] kind: &str,
		#[case] expected: ResourceScope,
	) {
		assert_eq!(
			lookup(&GroupVersionKind::gvk(group, version, kind)),
			Some(expected)
		);
	}

	#[test]
	fn test_lookup_is_version_exact() {
		assert_eq!(
			lookup(&GroupVersionKind::gvk("apps", "v2", "Deployment")),
			None
		);
	}

	#[test]
	fn test_entries_round_trip_through_lookup() {
		let entries: Vec<_> = entries().collect();
		assert_eq!(entries.len(), BUILTIN_SCOPES.len());
		for (gvk, scope) in entries {
			assert_eq!(lookup(&gvk), Some(scope), "{gvk}");
		}
	}
}
