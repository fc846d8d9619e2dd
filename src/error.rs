use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning the theme roots.
#[derive(Debug, Error)]
pub enum DiscoveryError {
	/// The root exists but its entries could not be listed.
	#[error("failed to read theme directory {path}")]
	ReadRoot {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl DiscoveryError {
	pub fn read_root(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::ReadRoot {
			path: path.into(),
			source,
		}
	}
}

/// Errors raised while interpreting the user's menu choice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
	/// The input was neither an exit keyword nor a number inside the menu range.
	#[error("invalid choice '{input}' (expected 1-{max}, 'q' or 'exit')")]
	InvalidChoice { input: String, max: usize },
}
