//! The format run: read input manifests and lay them out under the output directory.

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{bail, Context as _, Result};
use serde_json::Value as JsonValue;
use tracing::{debug, info, instrument};

use crate::{
	cluster::client::ClusterConnection,
	crd, files, namespaces,
	placement::{PlacementEngine, PlacementOpts},
	registry::{ClusterScopeRegistry, LocalScopeRegistry, ScopeRegistry},
	yaml,
};

#[derive(Debug, Clone, Default)]
pub struct FormatOpts {
	pub input_dirs: Vec<PathBuf>,
	pub output_dir: Option<PathBuf>,
	/// Resolve scopes against a live cluster instead of the built-in table.
	pub discovery: bool,
	/// Only used with `discovery`.
	pub kubeconfig: Option<PathBuf>,
	pub remove_input: bool,
	pub filter_kind_groups: Vec<String>,
	pub clean: bool,
}

impl FormatOpts {
	/// Check the required options are set, returning the output directory.
	fn validate(&self) -> Result<&Path> {
		if self.input_dirs.is_empty() {
			bail!("--input-dir is not set");
		}
		match self.output_dir.as_deref() {
			Some(dir) if !dir.as_os_str().is_empty() => Ok(dir),
			_ => bail!("--output-dir is not set"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatReport {
	/// Documents written to the output directory.
	pub placed: usize,
	/// Documents dropped by a kind filter.
	pub filtered: usize,
	/// Namespace manifests created for namespaces without one.
	pub namespaces_created: Vec<PathBuf>,
	/// Input files deleted after processing.
	pub inputs_removed: usize,
}

struct InputFile {
	path: PathBuf,
	documents: Vec<JsonValue>,
}

fn read_inputs(input_dirs: &[PathBuf]) -> Result<Vec<InputFile>> {
	let mut inputs = Vec::new();
	for dir in input_dirs {
		let paths = files::list_yaml_files(dir)
			.with_context(|| format!("failed to list YAML files in {}", dir.display()))?;
		for path in paths {
			let content = fs::read_to_string(&path)
				.with_context(|| format!("failed to read {}", path.display()))?;
			let documents = yaml::parse_documents(&content)
				.with_context(|| format!("failed to parse {}", path.display()))?;
			inputs.push(InputFile { path, documents });
		}
	}
	Ok(inputs)
}

fn build_registry(opts: &FormatOpts) -> Result<Box<dyn ScopeRegistry>> {
	if !opts.discovery {
		return Ok(Box::new(LocalScopeRegistry::new()));
	}

	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()
		.context("failed to start async runtime")?;
	let registry = runtime.block_on(async {
		let connection = ClusterConnection::from_kubeconfig_path(opts.kubeconfig.as_deref())
			.await
			.context("failed to connect to cluster")?;
		ClusterScopeRegistry::discover(&connection)
			.await
			.context("failed to discover cluster resources")
	})?;
	Ok(Box::new(registry))
}

/// Reorganize every manifest under `opts.input_dirs` into `opts.output_dir`.
///
/// Any error aborts the run. Files already written stay in place.
#[instrument(skip_all)]
pub fn format(opts: &FormatOpts) -> Result<FormatReport> {
	let output_dir = opts.validate()?;
	let mut registry = build_registry(opts)?;

	let inputs = read_inputs(&opts.input_dirs)?;
	debug!(files = inputs.len(), "read input files");

	for input in &inputs {
		let resources = crd::find_resources(&input.documents)
			.with_context(|| format!("failed to find CRDs in {}", input.path.display()))?;
		for resource in resources {
			debug!(gvk = %resource.gvk, scope = ?resource.scope, "registering CRD resource");
			registry
				.add_resource(resource.gvk, resource.scope)
				.with_context(|| format!("failed to register CRDs in {}", input.path.display()))?;
		}
	}

	let mut report = FormatReport::default();
	let mut engine = PlacementEngine::new(
		&*registry,
		output_dir,
		PlacementOpts {
			filter_kind_groups: opts.filter_kind_groups.clone(),
			clean: opts.clean,
		},
	);

	for input in inputs {
		for document in input.documents {
			let placed = engine.place_and_write(document).with_context(|| {
				format!("failed to process input file {}", input.path.display())
			})?;
			match placed {
				Some(_) => report.placed += 1,
				None => report.filtered += 1,
			}
		}

		if opts.remove_input {
			fs::remove_file(&input.path).with_context(|| {
				format!("failed to remove input file {}", input.path.display())
			})?;
			report.inputs_removed += 1;
		}
	}

	report.namespaces_created =
		namespaces::create_missing_namespaces(output_dir, engine.namespaces())
			.context("failed to create namespace manifests")?;

	info!(
		placed = report.placed,
		filtered = report.filtered,
		namespaces_created = report.namespaces_created.len(),
		inputs_removed = report.inputs_removed,
		"formatted manifests"
	);

	Ok(report)
}
