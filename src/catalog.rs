//! Theme discovery.
//!
//! Both theme roots are listed on every run. A root that does not exist is a
//! normal state (most users have no `~/.themes`) and produces no entries.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::DiscoveryError;
use crate::layout::{GTK_VERSION_DIR, ThemeLayout};

/// Where a theme was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
	User,
	System,
}

impl Scope {
	pub fn label(self) -> &'static str {
		match self {
			Scope::User => "User",
			Scope::System => "System",
		}
	}
}

impl fmt::Display for Scope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A theme directory and whether it ships GTK 4 files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeEntry {
	/// Display form of the directory name. Bytes that are not UTF-8 are
	/// replaced, so never build paths from it.
	pub name: String,
	/// Directory name exactly as listed.
	#[serde(skip)]
	dir_name: OsString,
	pub supported: bool,
}

impl ThemeEntry {
	pub fn new(dir_name: impl Into<OsString>, supported: bool) -> Self {
		let dir_name = dir_name.into();
		Self {
			name: dir_name.to_string_lossy().into_owned(),
			dir_name,
			supported,
		}
	}

	pub fn dir_name(&self) -> &OsStr {
		&self.dir_name
	}

	pub fn support_label(&self) -> &'static str {
		if self.supported {
			"Supported"
		} else {
			"Not Supported"
		}
	}
}

/// A theme paired with the scope it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
	pub scope: Scope,
	#[serde(flatten)]
	pub theme: ThemeEntry,
}

/// User themes followed by system themes, in directory listing order.
///
/// The combined list is built once so that a menu number maps to an entry
/// by a single index lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeCatalog {
	entries: Vec<CatalogEntry>,
	user_count: usize,
}

impl ThemeCatalog {
	pub fn new(user: Vec<ThemeEntry>, system: Vec<ThemeEntry>) -> Self {
		let user_count = user.len();
		let entries = user
			.into_iter()
			.map(|theme| CatalogEntry {
				scope: Scope::User,
				theme,
			})
			.chain(system.into_iter().map(|theme| CatalogEntry {
				scope: Scope::System,
				theme,
			}))
			.collect();

		Self {
			entries,
			user_count,
		}
	}

	pub fn entries(&self) -> &[CatalogEntry] {
		&self.entries
	}

	pub fn user_count(&self) -> usize {
		self.user_count
	}

	pub fn system_count(&self) -> usize {
		self.entries.len() - self.user_count
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Menu number of the trailing exit option.
	pub fn exit_index(&self) -> usize {
		self.entries.len() + 1
	}

	/// Look up a 1-based menu number.
	pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
		index.checked_sub(1).and_then(|i| self.entries.get(i))
	}
}

/// Scan both roots of `layout`.
pub fn discover(layout: &ThemeLayout) -> Result<ThemeCatalog, DiscoveryError> {
	let user = scan_root(&layout.user_themes_dir)?;
	let system = scan_root(&layout.system_themes_dir)?;
	tracing::debug!(user = user.len(), system = system.len(), "discovered themes");
	Ok(ThemeCatalog::new(user, system))
}

/// List the theme directories directly under `root`.
///
/// Plain files are skipped. Symlinks that resolve to directories count as
/// themes since that is how many distributions ship aliases.
pub fn scan_root(root: &Path) -> Result<Vec<ThemeEntry>, DiscoveryError> {
	let read_dir = match fs::read_dir(root) {
		Ok(read_dir) => read_dir,
		Err(err) if err.kind() == io::ErrorKind::NotFound => {
			tracing::debug!(root = %root.display(), "theme root does not exist");
			return Ok(Vec::new());
		}
		Err(err) => return Err(DiscoveryError::read_root(root, err)),
	};

	let mut themes = Vec::new();
	for entry in read_dir {
		let entry = entry.map_err(|err| DiscoveryError::read_root(root, err))?;
		let path = entry.path();
		if !path.is_dir() {
			continue;
		}

		let supported = path.join(GTK_VERSION_DIR).exists();
		themes.push(ThemeEntry::new(entry.file_name(), supported));
	}

	Ok(themes)
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	fn entry(name: &str, supported: bool) -> ThemeEntry {
		ThemeEntry::new(name, supported)
	}

	#[test]
	fn missing_root_yields_no_themes() {
		let dir = tempdir().unwrap();
		let themes = scan_root(&dir.path().join("absent")).unwrap();
		assert!(themes.is_empty());
	}

	#[test]
	fn support_follows_version_folder() {
		let dir = tempdir().unwrap();
		fs::create_dir_all(dir.path().join("Modern/gtk-4.0")).unwrap();
		fs::create_dir_all(dir.path().join("Legacy/gtk-3.0")).unwrap();

		let mut themes = scan_root(dir.path()).unwrap();
		themes.sort_by(|a, b| a.name.cmp(&b.name));

		assert_eq!(themes, vec![entry("Legacy", false), entry("Modern", true)]);
	}

	#[test]
	fn plain_files_are_not_themes() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("README"), "notes").unwrap();
		fs::create_dir(dir.path().join("Theme")).unwrap();

		let themes = scan_root(dir.path()).unwrap();
		assert_eq!(themes, vec![entry("Theme", false)]);
	}

	#[test]
	fn non_utf8_names_keep_their_bytes() {
		use std::os::unix::ffi::OsStrExt;

		let dir = tempdir().unwrap();
		let raw = OsStr::from_bytes(b"Th\xffeme");
		fs::create_dir_all(dir.path().join(raw).join("gtk-4.0")).unwrap();

		let themes = scan_root(dir.path()).unwrap();

		assert_eq!(themes.len(), 1);
		assert_eq!(themes[0].dir_name(), raw);
		assert_eq!(themes[0].name, "Th\u{fffd}eme");
		assert!(themes[0].supported);
	}

	#[test]
	fn catalog_indexes_user_before_system() {
		let catalog = ThemeCatalog::new(
			vec![entry("Mine", true)],
			vec![entry("Adwaita", true), entry("Old", false)],
		);

		assert_eq!(catalog.user_count(), 1);
		assert_eq!(catalog.system_count(), 2);
		assert_eq!(catalog.exit_index(), 4);
		assert_eq!(catalog.get(1).unwrap().scope, Scope::User);
		assert_eq!(catalog.get(2).unwrap().theme.name, "Adwaita");
		assert_eq!(catalog.get(3).unwrap().scope, Scope::System);
		assert!(catalog.get(0).is_none());
		assert!(catalog.get(4).is_none());
	}

	#[test]
	fn discover_reads_both_roots() {
		let dir = tempdir().unwrap();
		let layout = ThemeLayout {
			user_themes_dir: dir.path().join("user"),
			system_themes_dir: dir.path().join("system"),
			config_dir: dir.path().join("config"),
		};
		fs::create_dir_all(layout.system_themes_dir.join("Adwaita/gtk-4.0")).unwrap();

		let catalog = discover(&layout).unwrap();
		assert_eq!(catalog.user_count(), 0);
		assert_eq!(
			catalog.entries(),
			&[CatalogEntry {
				scope: Scope::System,
				theme: entry("Adwaita", true),
			}]
		);
	}
}
