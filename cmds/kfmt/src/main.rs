use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use kfmt::{format, telemetry, FormatOpts};
use tracing::Level;

#[derive(Parser)]
#[command(name = "kfmt")]
#[command(about = "Format Kubernetes manifests into a canonical structure", long_about = None)]
#[command(version)]
struct Cli {
	/// Directories containing hydrated configs
	#[arg(short, long = "input-dir", value_name = "DIR")]
	input_dirs: Vec<PathBuf>,

	/// Output directory
	#[arg(short, long, value_name = "DIR")]
	output_dir: Option<PathBuf>,

	/// Use API server discovery to determine resource scopes
	#[arg(short, long)]
	discovery: bool,

	/// Path to kubeconfig, used with --discovery
	#[arg(short, long, value_name = "PATH")]
	kubeconfig: Option<PathBuf>,

	/// Remove processed input files
	#[arg(short, long)]
	remove_input: bool,

	/// Kind.group to filter out, e.g. Deployment.apps or Secret
	#[arg(short, long = "filter-kind-group", value_name = "KIND.GROUP")]
	filter_kind_groups: Vec<String>,

	/// Remove namespace field from cluster-scoped resources
	#[arg(short, long)]
	clean: bool,

	/// Log level (overrides RUST_LOG)
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<Level>,
}

impl From<Cli> for FormatOpts {
	fn from(cli: Cli) -> Self {
		Self {
			input_dirs: cli.input_dirs,
			output_dir: cli.output_dir,
			discovery: cli.discovery,
			kubeconfig: cli.kubeconfig,
			remove_input: cli.remove_input,
			filter_kind_groups: cli.filter_kind_groups,
			clean: cli.clean,
		}
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	telemetry::init(cli.log_level);

	format(&cli.into())?;
	Ok(())
}
