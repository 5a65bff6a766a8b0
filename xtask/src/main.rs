use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod builtin_scopes;
mod util;

#[derive(Parser)]
#[command(name = "xtask")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Regenerate the built-in resource scope table from a k8s.io/api checkout
	GenBuiltinScopes {
		/// Root of the k8s.io/api source tree
		api_dir: PathBuf,
	},
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	match cli.command {
		Commands::GenBuiltinScopes { api_dir } => builtin_scopes::generate(&api_dir),
	}
}

#[cfg(test)]
mod tests {
	use std::{fs, path::Path};

	use super::*;

	#[test]
	fn test_cargo_alias() {
		let config =
			fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("../.cargo/config.toml"))
				.unwrap();
		assert!(config
			.lines()
			.any(|line| line.trim() == r#"xtask = "run -p xtask --""#));

		let cli = Cli::try_parse_from(["xtask", "gen-builtin-scopes", "api"]).unwrap();
		assert!(matches!(
			cli.command,
			Commands::GenBuiltinScopes { api_dir } if api_dir == Path::new("api")
		));
	}
}
