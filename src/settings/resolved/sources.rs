use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	/// Derived from the home directory rather than set directly.
	Derived(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Derived(from) => write!(f, "default derived from {from}"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) home: Option<SettingSource>,
	pub(crate) user_themes_dir: Option<SettingSource>,
	pub(crate) system_themes_dir: Option<SettingSource>,
	pub(crate) config_dir: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_home(&self) -> SettingSource {
		self.home
			.clone()
			.unwrap_or(SettingSource::Derived("$HOME"))
	}

	/// Paths left unset inherit the origin of the home directory.
	pub(crate) fn source_for_user_themes_dir(&self) -> SettingSource {
		self.user_themes_dir
			.clone()
			.unwrap_or_else(|| self.source_for_home())
	}

	pub(crate) fn source_for_system_themes_dir(&self) -> SettingSource {
		self.system_themes_dir
			.clone()
			.unwrap_or(SettingSource::ConfigKey("paths.system_themes_dir"))
	}

	pub(crate) fn source_for_config_dir(&self) -> SettingSource {
		self.config_dir
			.clone()
			.unwrap_or_else(|| self.source_for_home())
	}
}
