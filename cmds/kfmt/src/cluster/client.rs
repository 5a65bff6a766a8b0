//! Kubernetes cluster connection management.

use std::{
	path::{Path, PathBuf},
	time::Duration,
};

use k8s_openapi::apimachinery::pkg::version::Info;
use kube::{
	config::{KubeConfigOptions, Kubeconfig, KubeconfigError},
	Client, Config,
};
use thiserror::Error;
use tracing::instrument;

/// Default timeout for Kubernetes API requests.
const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when connecting to a Kubernetes cluster.
#[derive(Debug, Error)]
pub enum ConnectionError {
	#[error("failed to read kubeconfig {}", path.display())]
	ReadKubeconfig {
		path: PathBuf,
		#[source]
		source: KubeconfigError,
	},

	#[error(transparent)]
	Kubeconfig(#[from] KubeconfigError),

	#[error(transparent)]
	Kube(#[from] kube::Error),
}

/// A client connected to the cluster selected by a kubeconfig's current context.
#[derive(Clone)]
pub struct ClusterConnection {
	client: Client,
	server_version: Info,
}

impl std::fmt::Debug for ClusterConnection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ClusterConnection")
			.field("server_version", &self.server_version)
			.finish_non_exhaustive()
	}
}

impl ClusterConnection {
	/// Connect using the kubeconfig at `path`.
	///
	/// Without a path the kubeconfig is located the usual way: `$KUBECONFIG`,
	/// then `~/.kube/config`.
	#[instrument(skip_all, fields(kubeconfig = ?path))]
	pub async fn from_kubeconfig_path(path: Option<&Path>) -> Result<Self, ConnectionError> {
		let kubeconfig = match path {
			Some(path) => {
				Kubeconfig::read_from(path).map_err(|source| ConnectionError::ReadKubeconfig {
					path: path.to_path_buf(),
					source,
				})?
			}
			None => Kubeconfig::read()?,
		};
		Self::from_kubeconfig(kubeconfig).await
	}

	/// Connect using the current context of an already loaded kubeconfig.
	#[instrument(skip_all)]
	pub async fn from_kubeconfig(kubeconfig: Kubeconfig) -> Result<Self, ConnectionError> {
		let mut config =
			Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?;
		config.read_timeout = Some(DEFAULT_API_TIMEOUT);
		let client = Client::try_from(config)?;

		let server_version = client.apiserver_version().await?;
		tracing::debug!(
			server_version = %server_version.git_version,
			"connected to cluster"
		);

		Ok(Self {
			client,
			server_version,
		})
	}

	/// Get a reference to the underlying kube client.
	pub fn client(&self) -> &Client {
		&self.client
	}
}
