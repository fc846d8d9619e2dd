use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod paths;

use paths::PathsSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	paths: PathsSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.paths.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			home: detect_source(
				cli.home.is_some(),
				self.paths.home.is_some(),
				"THEMELINK__PATHS__HOME",
				"--home",
				"paths.home",
			),
			user_themes_dir: detect_source(
				cli.user_themes_dir.is_some(),
				self.paths.user_themes_dir.is_some(),
				"THEMELINK__PATHS__USER_THEMES_DIR",
				"--user-themes-dir",
				"paths.user_themes_dir",
			),
			system_themes_dir: detect_source(
				cli.system_themes_dir.is_some(),
				self.paths.system_themes_dir.is_some(),
				"THEMELINK__PATHS__SYSTEM_THEMES_DIR",
				"--system-themes-dir",
				"paths.system_themes_dir",
			),
			config_dir: detect_source(
				cli.config_dir.is_some(),
				self.paths.config_dir.is_some(),
				"THEMELINK__PATHS__CONFIG_DIR",
				"--config-dir",
				"paths.config_dir",
			),
		};

		let (home, layout) = self.paths.resolve()?;
		let config = ResolvedConfig { home, layout };

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
