//! Fixed filesystem locations used for discovery and activation.
//!
//! [`ThemeLayout`] replaces ad hoc lookups of `$HOME` with an explicit value
//! that callers construct once and pass down. Tests point it at a temporary
//! directory.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::catalog::Scope;

/// Name of the toolkit version folder that marks a theme as supported. It is
/// also the folder inside the config directory the links land in.
pub const GTK_VERSION_DIR: &str = "gtk-4.0";

/// System-wide theme root.
pub const SYSTEM_THEMES_DIR: &str = "/usr/share/themes";

const GTK_CSS: &str = "gtk.css";
const GTK_DARK_CSS: &str = "gtk-dark.css";
const ASSETS: &str = "assets";

/// One symlink the installer attempts to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPair {
	pub source: PathBuf,
	pub destination: PathBuf,
}

/// Locations of both theme roots and the configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeLayout {
	pub user_themes_dir: PathBuf,
	pub system_themes_dir: PathBuf,
	pub config_dir: PathBuf,
}

impl ThemeLayout {
	/// Derive the default layout for the given home directory.
	pub fn from_home(home: &Path) -> Self {
		Self {
			user_themes_dir: home.join(".themes"),
			system_themes_dir: PathBuf::from(SYSTEM_THEMES_DIR),
			config_dir: home.join(".config"),
		}
	}

	/// Root directory that holds themes of the given scope.
	pub fn themes_dir(&self, scope: Scope) -> &Path {
		match scope {
			Scope::User => &self.user_themes_dir,
			Scope::System => &self.system_themes_dir,
		}
	}

	/// `<config>/gtk-4.0`, where GTK 4 reads user stylesheets from.
	pub fn gtk_dir(&self) -> PathBuf {
		self.config_dir.join(GTK_VERSION_DIR)
	}

	/// Paths removed by a reset, in removal order.
	pub fn reset_targets(&self) -> [PathBuf; 4] {
		let gtk_dir = self.gtk_dir();
		[
			gtk_dir.join(GTK_CSS),
			gtk_dir.join(GTK_DARK_CSS),
			gtk_dir.join(ASSETS),
			self.config_dir.join(ASSETS),
		]
	}

	/// Source/destination pairs for activating `theme` from `scope`.
	///
	/// `theme` is the directory name as listed, which need not be UTF-8.
	pub fn link_pairs<T: AsRef<OsStr> + ?Sized>(&self, scope: Scope, theme: &T) -> [LinkPair; 4] {
		let theme_dir = self.themes_dir(scope).join(theme.as_ref());
		let theme_gtk_dir = theme_dir.join(GTK_VERSION_DIR);
		let [css, dark_css, gtk_assets, config_assets] = self.reset_targets();

		[
			LinkPair {
				source: theme_gtk_dir.join(GTK_CSS),
				destination: css,
			},
			LinkPair {
				source: theme_gtk_dir.join(GTK_DARK_CSS),
				destination: dark_css,
			},
			LinkPair {
				source: theme_gtk_dir.join(ASSETS),
				destination: gtk_assets,
			},
			LinkPair {
				source: theme_dir.join(ASSETS),
				destination: config_assets,
			},
		]
	}
}
