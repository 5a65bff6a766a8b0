//! HTTP-based mock Kubernetes API server using wiremock.
//!
//! Only the endpoints a discovery client needs are served: `/version`, the
//! aggregated discovery documents and the legacy per-group resource lists.

use std::time::Duration;

use bon::Builder;
use kube::config::{
	AuthInfo, Cluster, Context, Kubeconfig, NamedAuthInfo, NamedCluster, NamedContext,
};
use serde_json::{json, Value as JsonValue};
use tracing::debug;
use wiremock::{
	matchers::{header_regex, method, path},
	Mock, MockServer, ResponseTemplate,
};

use super::discovery::{DiscoveryMode, MockApiResource, MockDiscovery};

/// Content type a client expects for aggregated discovery responses.
const AGGREGATED_DISCOVERY_CONTENT_TYPE: &str =
	"application/json;g=apidiscovery.k8s.io;v=v2;as=APIGroupDiscoveryList";

const VERBS: [&str; 3] = ["get", "list", "watch"];

/// A mock Kubernetes API server exposed over HTTP.
#[derive(Builder)]
pub struct MockApiServer {
	#[builder(default)]
	discovery_mode: DiscoveryMode,
	/// Resources to advertise.
	#[builder(default)]
	discovery: MockDiscovery,
	/// How long the `/api` and `/apis` discovery endpoints wait before answering.
	#[builder(default)]
	discovery_delay: Duration,
}

/// A running mock server instance. The server stops when this is dropped.
pub struct RunningMockApiServer {
	server: MockServer,
}

impl MockApiServer {
	/// Start the mock server with the configured discovery documents mounted.
	pub async fn start(self) -> RunningMockApiServer {
		let server = MockServer::start().await;
		debug!(uri = %server.uri(), "started mock API server");

		mount_version(&server).await;
		let delay = self.discovery_delay;
		match self.discovery_mode {
			DiscoveryMode::Aggregated => {
				mount_aggregated_discovery(&server, &self.discovery, delay).await;
			}
			DiscoveryMode::Legacy => reject_aggregated_discovery(&server, delay).await,
		}
		mount_legacy_discovery(&server, &self.discovery, delay).await;

		RunningMockApiServer { server }
	}
}

impl RunningMockApiServer {
	/// Get the server's URI (e.g., "http://127.0.0.1:12345").
	pub fn uri(&self) -> String {
		self.server.uri()
	}

	/// Create a Kubeconfig whose current context points to this mock server.
	pub fn kubeconfig(&self) -> Kubeconfig {
		let cluster_name = "mock-cluster";
		let context_name = "mock-context";
		let user_name = "mock-user";

		Kubeconfig {
			clusters: vec![NamedCluster {
				name: cluster_name.to_string(),
				cluster: Some(Cluster {
					server: Some(self.uri()),
					insecure_skip_tls_verify: Some(true),
					..Default::default()
				}),
			}],
			contexts: vec![NamedContext {
				name: context_name.to_string(),
				context: Some(Context {
					cluster: cluster_name.to_string(),
					user: Some(user_name.to_string()),
					..Default::default()
				}),
			}],
			auth_infos: vec![NamedAuthInfo {
				name: user_name.to_string(),
				auth_info: Some(AuthInfo::default()),
			}],
			current_context: Some(context_name.to_string()),
			..Default::default()
		}
	}
}

async fn mount_version(server: &MockServer) {
	Mock::given(method("GET"))
		.and(path("/version"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"major": "1",
			"minor": "31",
			"gitVersion": "v1.31.0",
			"gitCommit": "fake",
			"gitTreeState": "clean",
			"buildDate": "2024-08-13T00:00:00Z",
			"goVersion": "go1.22.5",
			"compiler": "gc",
			"platform": "linux/amd64"
		})))
		.mount(server)
		.await;
}

fn aggregated_resources(
	group: &str,
	version: &str,
	resources: &[MockApiResource],
) -> Vec<JsonValue> {
	resources
		.iter()
		.map(|r| {
			json!({
				"resource": r.name,
				"responseKind": {
					"group": group,
					"version": version,
					"kind": r.kind
				},
				"scope": r.scope_name(),
				"verbs": VERBS,
			})
		})
		.collect()
}

fn aggregated_group(group: &str, versions: &[(&str, &[MockApiResource])]) -> JsonValue {
	let versions: Vec<_> = versions
		.iter()
		.map(|(version, resources)| {
			json!({
				"version": version,
				"resources": aggregated_resources(group, version, resources),
				"freshness": "Current"
			})
		})
		.collect();

	json!({
		"metadata": { "name": group },
		"versions": versions
	})
}

fn aggregated_list(items: Vec<JsonValue>) -> ResponseTemplate {
	let body = json!({
		"kind": "APIGroupDiscoveryList",
		"apiVersion": "apidiscovery.k8s.io/v2",
		"items": items
	});
	// set_body_json would overwrite the content type
	ResponseTemplate::new(200).set_body_raw(
		serde_json::to_vec(&body).expect("serializing discovery JSON should never fail"),
		AGGREGATED_DISCOVERY_CONTENT_TYPE,
	)
}

async fn mount_aggregated_discovery(
	server: &MockServer,
	discovery: &MockDiscovery,
	delay: Duration,
) {
	let core = aggregated_group("", &[("v1", discovery.core_resources.as_slice())]);
	let groups: Vec<_> = discovery
		.groups()
		.iter()
		.map(|(group, versions)| aggregated_group(group, versions))
		.collect();

	// Matched before the legacy endpoints below because the accept header is checked
	Mock::given(method("GET"))
		.and(path("/api"))
		.and(header_regex("accept", "apidiscovery"))
		.respond_with(aggregated_list(vec![core]).set_delay(delay))
		.mount(server)
		.await;

	Mock::given(method("GET"))
		.and(path("/apis"))
		.and(header_regex("accept", "apidiscovery"))
		.respond_with(aggregated_list(groups).set_delay(delay))
		.mount(server)
		.await;
}

async fn reject_aggregated_discovery(server: &MockServer, delay: Duration) {
	for endpoint in ["/api", "/apis"] {
		Mock::given(method("GET"))
			.and(path(endpoint))
			.and(header_regex("accept", "apidiscovery"))
			.respond_with(ResponseTemplate::new(406).set_delay(delay))
			.mount(server)
			.await;
	}
}

fn resource_list(group_version: &str, resources: &[MockApiResource]) -> JsonValue {
	let resources: Vec<_> = resources
		.iter()
		.map(|r| {
			json!({
				"name": r.name,
				"singularName": "",
				"namespaced": r.scope.is_namespaced(),
				"kind": r.kind,
				"verbs": VERBS,
			})
		})
		.collect();

	json!({
		"kind": "APIResourceList",
		"apiVersion": "v1",
		"groupVersion": group_version,
		"resources": resources
	})
}

async fn mount_legacy_discovery(
	server: &MockServer,
	discovery: &MockDiscovery,
	delay: Duration,
) {
	Mock::given(method("GET"))
		.and(path("/api"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({
					"kind": "APIVersions",
					"versions": ["v1"],
					"serverAddressByClientCIDRs": []
				}))
				.set_delay(delay),
		)
		.mount(server)
		.await;

	Mock::given(method("GET"))
		.and(path("/api/v1"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(resource_list("v1", &discovery.core_resources)),
		)
		.mount(server)
		.await;

	let groups: Vec<_> = discovery
		.groups()
		.iter()
		.map(|(group, versions)| {
			let versions: Vec<_> = versions
				.iter()
				.map(|(version, _)| {
					json!({ "groupVersion": format!("{group}/{version}"), "version": version })
				})
				.collect();
			json!({
				"name": group,
				"preferredVersion": versions.first(),
				"versions": versions,
			})
		})
		.collect();

	Mock::given(method("GET"))
		.and(path("/apis"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({
					"kind": "APIGroupList",
					"apiVersion": "v1",
					"groups": groups
				}))
				.set_delay(delay),
		)
		.mount(server)
		.await;

	for (group_version, resources) in &discovery.group_resources {
		Mock::given(method("GET"))
			.and(path(format!("/apis/{group_version}")))
			.respond_with(
				ResponseTemplate::new(200).set_body_json(resource_list(group_version, resources)),
			)
			.mount(server)
			.await;
	}
}
