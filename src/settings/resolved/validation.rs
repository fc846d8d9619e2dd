use std::path::Path;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(home) = &config.home {
		require_absolute("paths.home", home, sources.source_for_home())?;
	}

	let layout = &config.layout;
	require_absolute(
		"paths.user_themes_dir",
		&layout.user_themes_dir,
		sources.source_for_user_themes_dir(),
	)?;
	require_absolute(
		"paths.system_themes_dir",
		&layout.system_themes_dir,
		sources.source_for_system_themes_dir(),
	)?;
	require_absolute(
		"paths.config_dir",
		&layout.config_dir,
		sources.source_for_config_dir(),
	)?;

	Ok(())
}

fn require_absolute(
	key: &'static str,
	path: &Path,
	origin: SettingSource,
) -> Result<(), ConfigError> {
	if path.is_absolute() {
		return Ok(());
	}

	Err(ConfigError::relative_path(key, path, origin))
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use themelink::ThemeLayout;

	use super::*;

	#[test]
	fn validation_accepts_default_layout() {
		let config = ResolvedConfig {
			home: Some(PathBuf::from("/home/ada")),
			layout: ThemeLayout::from_home(Path::new("/home/ada")),
		};

		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_relative_themes_dir() {
		let mut layout = ThemeLayout::from_home(Path::new("/home/ada"));
		layout.system_themes_dir = PathBuf::from("themes");
		let config = ResolvedConfig {
			home: Some(PathBuf::from("/home/ada")),
			layout,
		};

		let sources = ConfigSources {
			system_themes_dir: Some(SettingSource::Environment(
				"THEMELINK__PATHS__SYSTEM_THEMES_DIR",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "paths.system_themes_dir");
		let message = err.to_string();
		assert!(message.contains("value: themes"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn relative_home_is_blamed_for_derived_paths() {
		let config = ResolvedConfig {
			home: Some(PathBuf::from("ada")),
			layout: ThemeLayout::from_home(Path::new("ada")),
		};
		let sources = ConfigSources {
			home: Some(SettingSource::ConfigKey("paths.home")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "paths.home");
		assert_eq!(err.origin(), &SettingSource::ConfigKey("paths.home"));
	}
}
