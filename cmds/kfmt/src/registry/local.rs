use std::collections::HashMap;

use k8s::{builtin, GroupKind, GroupVersionKind, ResourceScope};

use super::{Overlay, RegistryError, ScopeRegistry};

/// Registry backed by the built-in scope table, for use without a cluster.
///
/// Resolution order:
/// 1. kinds registered with [`ScopeRegistry::add_resource`], by exact version
/// 2. built-in kinds, by exact version
/// 3. built-in kinds with the same group and kind at any version
#[derive(Debug)]
pub struct LocalScopeRegistry {
	overlay: Overlay,
	builtin_group_kinds: HashMap<GroupKind, ResourceScope>,
}

impl LocalScopeRegistry {
	pub fn new() -> Self {
		let mut builtin_group_kinds = HashMap::new();
		for (gvk, scope) in builtin::entries() {
			builtin_group_kinds.entry(gvk.group_kind()).or_insert(scope);
		}
		Self {
			overlay: Overlay::default(),
			builtin_group_kinds,
		}
	}
}

impl Default for LocalScopeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl ScopeRegistry for LocalScopeRegistry {
	fn scope(&self, gvk: &GroupVersionKind) -> Result<ResourceScope, RegistryError> {
		self.overlay
			.get(gvk)
			.or_else(|| builtin::lookup(gvk))
			.or_else(|| self.builtin_group_kinds.get(&gvk.group_kind()).copied())
			.ok_or_else(|| RegistryError::KindNotFound(gvk.clone()))
	}

	fn add_resource(
		&mut self,
		gvk: GroupVersionKind,
		scope: ResourceScope,
	) -> Result<(), RegistryError> {
		self.overlay.insert(gvk, scope)
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(GroupVersionKind::gvk("", "v1", "ConfigMap"), true)]
	#[case(GroupVersionKind::gvk("", "v1", "Namespace"), false)]
	#[case(GroupVersionKind::gvk("apps", "v1", "Deployment"), true)]
	#[case(GroupVersionKind::gvk("rbac.authorization.k8s.io", "v1", "ClusterRole"), false)]
	// Not served at this version, resolved through group and kind.
	#[case(GroupVersionKind::gvk("apps", "v9", "Deployment"), true)]
	#[case(GroupVersionKind::gvk("storage.k8s.io", "v2", "StorageClass"), false)]
	fn test_builtin_kinds(#[case] gvk: GroupVersionKind, #[case] namespaced: bool) {
		let registry = LocalScopeRegistry::new();
		assert_eq!(registry.is_namespaced(&gvk).unwrap(), namespaced);
	}

	#[test]
	fn test_every_builtin_entry_resolves() {
		let registry = LocalScopeRegistry::new();
		for (gvk, scope) in builtin::entries() {
			assert_eq!(registry.scope(&gvk).unwrap(), scope, "{gvk}");
		}
	}

	#[test]
	fn test_unknown_kind() {
		let registry = LocalScopeRegistry::new();
		let gvk = GroupVersionKind::gvk("example.com", "v1", "Widget");
		assert_matches!(
			registry.is_namespaced(&gvk),
			Err(RegistryError::KindNotFound(missing)) if missing == gvk
		);
	}

	#[test]
	fn test_added_versions_are_independent() {
		let mut registry = LocalScopeRegistry::new();
		let alpha = GroupVersionKind::gvk("example.com", "v1alpha1", "Widget");
		let stable = GroupVersionKind::gvk("example.com", "v1", "Widget");

		registry
			.add_resource(alpha.clone(), ResourceScope::Namespaced)
			.unwrap();
		registry
			.add_resource(stable.clone(), ResourceScope::Namespaced)
			.unwrap();

		assert!(registry.is_namespaced(&alpha).unwrap());
		assert!(registry.is_namespaced(&stable).unwrap());
		// Added kinds are only matched by exact version.
		assert_matches!(
			registry.is_namespaced(&GroupVersionKind::gvk("example.com", "v2", "Widget")),
			Err(RegistryError::KindNotFound(_))
		);
	}

	#[test]
	fn test_added_resource_takes_precedence() {
		let mut registry = LocalScopeRegistry::new();
		let gvk = GroupVersionKind::gvk("", "v1", "ConfigMap");
		registry
			.add_resource(gvk.clone(), ResourceScope::ClusterWide)
			.unwrap();
		assert!(!registry.is_namespaced(&gvk).unwrap());
	}

	#[test]
	fn test_add_duplicate_resource() {
		let mut registry = LocalScopeRegistry::new();
		let gvk = GroupVersionKind::gvk("example.com", "v1", "Widget");
		registry
			.add_resource(gvk.clone(), ResourceScope::Namespaced)
			.unwrap();
		assert_matches!(
			registry.add_resource(gvk, ResourceScope::Namespaced),
			Err(RegistryError::DuplicateResource(_))
		);
	}

	#[test]
	fn test_core_group() {
		let registry = LocalScopeRegistry::new();
		assert!(registry.is_core_group(""));
		assert!(!registry.is_core_group("apps"));
	}
}
