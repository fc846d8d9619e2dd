use std::path::PathBuf;

use thiserror::Error;

use super::SettingSource;

/// A path setting that cannot be used as given.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	/// Paths are joined onto theme and config roots, so they must not depend
	/// on the working directory.
	#[error("{key} from {origin} must be an absolute path (value: {})", .path.display())]
	RelativePath {
		key: &'static str,
		path: PathBuf,
		origin: SettingSource,
	},
}

impl ConfigError {
	pub(crate) fn relative_path(
		key: &'static str,
		path: impl Into<PathBuf>,
		origin: SettingSource,
	) -> Self {
		Self::RelativePath {
			key,
			path: path.into(),
			origin,
		}
	}

	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::RelativePath { key, .. } => key,
		}
	}

	pub(crate) fn origin(&self) -> &SettingSource {
		match self {
			Self::RelativePath { origin, .. } => origin,
		}
	}
}
