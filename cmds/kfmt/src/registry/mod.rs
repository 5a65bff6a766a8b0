//! Resource scope registries.
//!
//! A registry answers whether a resource kind is namespaced. Both
//! implementations layer an overlay of locally declared kinds (from CRDs in
//! the input) over a base source: the built-in table in [`LocalScopeRegistry`],
//! or a live cluster's discovery document in [`ClusterScopeRegistry`].

use std::collections::HashMap;

use k8s::{GroupVersionKind, ResourceScope};
use thiserror::Error;

mod cluster;
mod local;

pub use cluster::ClusterScopeRegistry;
pub use local::LocalScopeRegistry;

#[derive(Debug, Error)]
pub enum RegistryError {
	#[error("kind not found: {0}")]
	KindNotFound(GroupVersionKind),

	#[error("resource already exists: {0}")]
	DuplicateResource(GroupVersionKind),
}

pub trait ScopeRegistry {
	/// Resolve the scope of a resource kind.
	///
	/// Kinds that cannot be resolved are an error, never a guess.
	fn scope(&self, gvk: &GroupVersionKind) -> Result<ResourceScope, RegistryError>;

	/// Register a locally declared resource kind.
	///
	/// Registering the same exact kind twice is an error.
	fn add_resource(
		&mut self,
		gvk: GroupVersionKind,
		scope: ResourceScope,
	) -> Result<(), RegistryError>;

	fn is_namespaced(&self, gvk: &GroupVersionKind) -> Result<bool, RegistryError> {
		self.scope(gvk).map(ResourceScope::is_namespaced)
	}

	/// Whether `group` is the core API group, whose kinds carry no group suffix in paths.
	fn is_core_group(&self, group: &str) -> bool {
		group.is_empty()
	}
}

/// Kinds registered at runtime, keyed by exact group, version and kind.
#[derive(Debug, Default)]
pub(crate) struct Overlay {
	resources: HashMap<GroupVersionKind, ResourceScope>,
}

impl Overlay {
	pub(crate) fn insert(
		&mut self,
		gvk: GroupVersionKind,
		scope: ResourceScope,
	) -> Result<(), RegistryError> {
		if self.resources.contains_key(&gvk) {
			return Err(RegistryError::DuplicateResource(gvk));
		}
		self.resources.insert(gvk, scope);
		Ok(())
	}

	pub(crate) fn get(&self, gvk: &GroupVersionKind) -> Option<ResourceScope> {
		self.resources.get(gvk).copied()
	}
}
