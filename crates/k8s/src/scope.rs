/// Kubernetes API resource scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceScope {
	/// Resource is namespaced (e.g., Deployment, ConfigMap).
	Namespaced,

	/// Resource is cluster-wide (e.g., Namespace, ClusterRole).
	ClusterWide,
}

impl ResourceScope {
	pub fn from_namespaced(namespaced: bool) -> Self {
		if namespaced {
			Self::Namespaced
		} else {
			Self::ClusterWide
		}
	}

	/// Interpret a CustomResourceDefinition `spec.scope` value.
	///
	/// Only `Namespaced` is namespaced; any other value is cluster-wide.
	pub fn from_crd_scope(scope: &str) -> Self {
		Self::from_namespaced(scope == "Namespaced")
	}

	pub fn is_namespaced(self) -> bool {
		self == Self::Namespaced
	}
}
