//! Link a theme into the GTK 4 configuration directory, or remove those links.
//!
//! Both operations are best effort. Every path is attempted exactly once and
//! a failure on one path never stops the others.

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::catalog::Scope;
use crate::layout::ThemeLayout;

/// Outcome of [`reset`].
#[derive(Debug, Default)]
pub struct ResetReport {
	pub removed: Vec<PathBuf>,
	pub failed: Vec<(PathBuf, io::Error)>,
}

/// Outcome of [`install`].
#[derive(Debug, Default)]
pub struct InstallReport {
	pub linked: Vec<PathBuf>,
	/// Sources the theme does not ship.
	pub skipped: Vec<PathBuf>,
	pub failed: usize,
}

impl InstallReport {
	/// All four files were linked.
	pub fn is_complete(&self) -> bool {
		self.failed == 0 && self.skipped.is_empty()
	}

	pub fn status_line(&self, theme: &str) -> String {
		if self.is_complete() {
			"Theme applied successfully.".to_string()
		} else {
			format!(
				"Theme {theme} applied, albeit some files might be missing or could not be linked."
			)
		}
	}
}

/// Remove the stylesheet and asset links from the configuration directory.
///
/// Removal is not recursive: files and symlinks go away, a real directory is
/// reported as a failure and left alone.
pub fn reset<W: Write>(layout: &ThemeLayout, out: &mut W) -> io::Result<ResetReport> {
	writeln!(out, "Resetting to default theme...")?;

	let mut report = ResetReport::default();
	for path in layout.reset_targets() {
		match fs::remove_file(&path) {
			Ok(()) => {
				tracing::debug!(path = %path.display(), "removed");
				report.removed.push(path);
			}
			Err(err) => {
				tracing::debug!(path = %path.display(), error = %err, "theme reset failed");
				writeln!(out, "Error during theme reset: {}: {err}", path.display())?;
				report.failed.push((path, err));
			}
		}
	}

	Ok(report)
}

/// Symlink the files of `theme` (found under the `scope` root) into the
/// configuration directory.
///
/// `theme` is the raw directory name; it is only made lossy for printing.
/// Sources the theme does not provide are skipped. Link failures, usually a
/// destination that already exists, are counted but not printed; the final
/// status line summarizes them.
pub fn install<W: Write, T: AsRef<OsStr> + ?Sized>(
	layout: &ThemeLayout,
	scope: Scope,
	theme: &T,
	out: &mut W,
) -> io::Result<InstallReport> {
	let dir_name = theme.as_ref();
	let display_name = dir_name.to_string_lossy();
	writeln!(out, "Setting theme to: {display_name}")?;

	let mut report = InstallReport::default();
	for pair in layout.link_pairs(scope, dir_name) {
		if !pair.source.exists() {
			tracing::debug!(source = %pair.source.display(), "source missing, skipping");
			report.skipped.push(pair.source);
			continue;
		}

		match link(&pair.source, &pair.destination) {
			Ok(()) => report.linked.push(pair.destination),
			Err(err) => {
				tracing::debug!(
					source = %pair.source.display(),
					destination = %pair.destination.display(),
					error = %err,
					"failed to link"
				);
				report.failed += 1;
			}
		}
	}

	writeln!(out, "{}", report.status_line(&display_name))?;
	Ok(report)
}

fn link(source: &Path, destination: &Path) -> io::Result<()> {
	if let Some(parent) = destination.parent() {
		fs::create_dir_all(parent)?;
	}
	std::os::unix::fs::symlink(source, destination)
}
