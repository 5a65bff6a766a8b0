//! Mock Kubernetes API server for testing.
//!
//! Serves the version and discovery endpoints over HTTP, so tests can connect
//! through an ordinary kubeconfig.

pub mod discovery;
pub mod http;

pub use discovery::{DiscoveryMode, MockApiResource, MockDiscovery};
pub use http::{MockApiServer, RunningMockApiServer};
