//! Kubernetes API resource discovery and caching.
//!
//! The cluster's discovery document is fetched once and cached, so scope
//! lookups during formatting never go back to the API server.

use std::{collections::HashMap, time::Duration};

use k8s::{GroupVersionKind, ResourceScope};
use kube::{
	discovery::{ApiResource, Scope},
	Client, Discovery,
};
use thiserror::Error;
use tracing::instrument;

/// Errors that can occur during API resource discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
	#[error("full API discovery failed")]
	FullDiscovery(#[source] kube::Error),

	#[error("API discovery did not complete within {0:?}")]
	Timeout(Duration),
}

fn gvk_from_api_resource(ar: &ApiResource) -> GroupVersionKind {
	GroupVersionKind::gvk(&ar.group, &ar.version, &ar.kind)
}

/// Cached scopes of every resource the cluster serves, at every served version.
#[derive(Debug, Clone, Default)]
pub struct ApiResourceCache {
	resources: HashMap<GroupVersionKind, ResourceScope>,
}

impl ApiResourceCache {
	/// Build the cache by querying the cluster's discovery API.
	///
	/// Uses the Aggregated Discovery API (K8s 1.26+) which requires only 2 API
	/// calls, falling back to full discovery for older clusters. The whole
	/// fetch is abandoned after `timeout`.
	#[instrument(skip(client))]
	pub async fn build(client: &Client, timeout: Duration) -> Result<Self, DiscoveryError> {
		tokio::time::timeout(timeout, Self::discover(client))
			.await
			.map_err(|_| DiscoveryError::Timeout(timeout))?
	}

	async fn discover(client: &Client) -> Result<Self, DiscoveryError> {
		match Discovery::new(client.clone()).run_aggregated().await {
			Ok(discovery) => {
				tracing::debug!("using aggregated discovery");
				Ok(Self::from_discovery(&discovery))
			}
			Err(e) => {
				tracing::debug!(error = %e, "aggregated discovery not available, using full discovery");
				let discovery = Discovery::new(client.clone())
					.run()
					.await
					.map_err(DiscoveryError::FullDiscovery)?;
				Ok(Self::from_discovery(&discovery))
			}
		}
	}

	fn from_discovery(discovery: &Discovery) -> Self {
		let mut resources = HashMap::new();

		for group in discovery.groups() {
			// Iterate all versions, not just recommended, so we can handle
			// manifests using older API versions (e.g., v1alpha1 vs v1beta1)
			for ver in group.versions() {
				for (ar, caps) in group.versioned_resources(ver) {
					let scope = match caps.scope {
						Scope::Namespaced => ResourceScope::Namespaced,
						Scope::Cluster => ResourceScope::ClusterWide,
					};
					resources.insert(gvk_from_api_resource(&ar), scope);
				}
			}
		}

		tracing::debug!(resources = resources.len(), "discovered API resources");
		Self { resources }
	}

	/// Look up a resource by its GroupVersionKind.
	pub fn lookup(&self, gvk: &GroupVersionKind) -> Option<ResourceScope> {
		self.resources.get(gvk).copied()
	}
}

impl FromIterator<(GroupVersionKind, ResourceScope)> for ApiResourceCache {
	fn from_iter<T: IntoIterator<Item = (GroupVersionKind, ResourceScope)>>(iter: T) -> Self {
		Self {
			resources: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup_is_version_exact() {
		let cache: ApiResourceCache = [(
			GroupVersionKind::gvk("apps", "v1", "Deployment"),
			ResourceScope::Namespaced,
		)]
		.into_iter()
		.collect();

		assert_eq!(
			cache.lookup(&GroupVersionKind::gvk("apps", "v1", "Deployment")),
			Some(ResourceScope::Namespaced)
		);
		assert_eq!(
			cache.lookup(&GroupVersionKind::gvk("apps", "v1beta1", "Deployment")),
			None
		);
	}
}
