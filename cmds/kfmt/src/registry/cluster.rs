use std::time::Duration;

use k8s::{GroupVersionKind, ResourceScope};
use tracing::instrument;

use super::{Overlay, RegistryError, ScopeRegistry};
use crate::cluster::{
	client::ClusterConnection,
	discovery::{ApiResourceCache, DiscoveryError},
};

/// Upper bound on the initial discovery fetch.
pub const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(60);

/// Registry backed by a snapshot of a live cluster's discovery document.
///
/// Kinds the cluster does not serve fall back to kinds registered with
/// [`ScopeRegistry::add_resource`], e.g. CRDs in the input that have not
/// been applied yet.
#[derive(Debug)]
pub struct ClusterScopeRegistry {
	cache: ApiResourceCache,
	overlay: Overlay,
}

impl ClusterScopeRegistry {
	pub fn new(cache: ApiResourceCache) -> Self {
		Self {
			cache,
			overlay: Overlay::default(),
		}
	}

	/// Fetch the cluster's discovery document and build a registry from it.
	#[instrument(skip_all)]
	pub async fn discover(connection: &ClusterConnection) -> Result<Self, DiscoveryError> {
		let cache = ApiResourceCache::build(connection.client(), DISCOVERY_TIMEOUT).await?;
		Ok(Self::new(cache))
	}
}

impl ScopeRegistry for ClusterScopeRegistry {
	fn scope(&self, gvk: &GroupVersionKind) -> Result<ResourceScope, RegistryError> {
		self.cache
			.lookup(gvk)
			.or_else(|| self.overlay.get(gvk))
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
