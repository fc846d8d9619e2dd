use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Merge the config file, `--config` files, `THEMELINK__*` variables and CLI
/// flags into a validated [`ResolvedConfig`].
///
/// A value of the wrong type is reported together with every merged layer,
/// since the `config` crate does not say which one carried it.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let layers = build_config(cli)?;
	let described = layers.describe();
	tracing::debug!(layers = %described, "merged configuration");

	let mut raw: RawConfig = layers
		.config
		.try_deserialize()
		.with_context(|| format!("invalid [paths] settings in {described}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
