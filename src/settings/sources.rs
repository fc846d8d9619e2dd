use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use crate::cli::CliArgs;
use themelink::app_dirs;

const ENV_PREFIX: &str = "themelink";

/// Merged configuration plus the files that were actually read into it.
pub(super) struct ConfigLayers {
	pub(super) config: Config,
	pub(super) files: Vec<PathBuf>,
}

impl ConfigLayers {
	/// Human readable list of merged layers, lowest precedence first.
	pub(super) fn describe(&self) -> String {
		let mut parts: Vec<String> = self
			.files
			.iter()
			.map(|path| path.display().to_string())
			.collect();
		parts.push("THEMELINK__* environment".to_string());
		parts.join(", ")
	}
}

/// Build a [`Config`] from the default file, any `--config` files and the
/// environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<ConfigLayers> {
	let mut builder = Config::builder();
	let mut files = Vec::new();

	if !cli.no_config {
		for path in default_config_files() {
			if path.is_file() {
				files.push(path.clone());
			}
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		files.push(path.clone());
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

	let config = builder.build().with_context(|| {
		let listed: Vec<String> = cli.config.iter().map(|p| p.display().to_string()).collect();
		if listed.is_empty() {
			"failed to read the default configuration file".to_string()
		} else {
			format!("failed to read configuration from {}", listed.join(", "))
		}
	})?;

	Ok(ConfigLayers { config, files })
}

/// The tool's own `config.toml`.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	app_dirs::get_config_dir()
		.map(|dir| vec![dir.join("config.toml")])
		.unwrap_or_default()
}
