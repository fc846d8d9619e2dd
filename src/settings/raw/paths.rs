use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;
use themelink::{ThemeLayout, app_dirs};

use crate::cli::CliArgs;

/// Path overrides as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PathsSection {
	pub(super) home: Option<PathBuf>,
	pub(super) user_themes_dir: Option<PathBuf>,
	pub(super) system_themes_dir: Option<PathBuf>,
	pub(super) config_dir: Option<PathBuf>,
}

impl PathsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.home.clone() {
			self.home = Some(value);
		}
		if let Some(value) = cli.user_themes_dir.clone() {
			self.user_themes_dir = Some(value);
		}
		if let Some(value) = cli.system_themes_dir.clone() {
			self.system_themes_dir = Some(value);
		}
		if let Some(value) = cli.config_dir.clone() {
			self.config_dir = Some(value);
		}
	}

	/// Fill unset paths from the home directory. `$HOME` is only consulted
	/// when some path still depends on it.
	pub(super) fn resolve(self) -> Result<(Option<PathBuf>, ThemeLayout)> {
		let needs_home = self.user_themes_dir.is_none() || self.config_dir.is_none();
		let home = match self.home {
			Some(home) => Some(home),
			None if needs_home => Some(app_dirs::get_home_dir()?),
			None => None,
		};

		let mut layout = match &home {
			Some(home) => ThemeLayout::from_home(home),
			None => ThemeLayout::from_home(&PathBuf::new()),
		};
		if let Some(dir) = self.user_themes_dir {
			layout.user_themes_dir = dir;
		}
		if let Some(dir) = self.system_themes_dir {
			layout.system_themes_dir = dir;
		}
		if let Some(dir) = self.config_dir {
			layout.config_dir = dir;
		}

		Ok((home, layout))
	}
}
