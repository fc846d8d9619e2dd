//! The interactive flow: discover, show the menu, read a choice, activate.
//!
//! Input and output are injected so the whole flow runs against in-memory
//! buffers in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::activation::{self, InstallReport};
use crate::catalog::{self, Scope};
use crate::error::SelectionError;
use crate::layout::ThemeLayout;
use crate::menu::{self, NO_THEMES_MESSAGE};
use crate::selection::{self, Selection};

pub const INVALID_CHOICE_MESSAGE: &str = "Incorrect value! Please try again.";

/// How an interactive run ended. Every variant is a normal exit.
#[derive(Debug)]
pub enum SessionOutcome {
	/// Neither theme root produced any entry.
	NoThemes,
	Exited,
	Aborted { theme: String },
	InvalidChoice(SelectionError),
	Installed {
		theme: String,
		scope: Scope,
		report: InstallReport,
	},
}

impl SessionOutcome {
	/// Whether the run touched the configuration directory.
	pub fn mutated(&self) -> bool {
		matches!(self, SessionOutcome::Installed { .. })
	}
}

/// Run the interactive selection against `layout`.
pub fn run<R: BufRead, W: Write>(
	layout: &ThemeLayout,
	input: &mut R,
	out: &mut W,
) -> Result<SessionOutcome> {
	let catalog = catalog::discover(layout)?;

	if catalog.is_empty() {
		writeln!(out, "{NO_THEMES_MESSAGE}")?;
		return Ok(SessionOutcome::NoThemes);
	}

	menu::render(&catalog, out).context("failed to print the theme menu")?;

	let selection = match selection::select(&catalog, input, out) {
		Ok(selection) => selection,
		Err(err) => match err.downcast::<SelectionError>() {
			Ok(invalid) => {
				tracing::info!(error = %invalid, "rejected menu choice");
				writeln!(out, "{INVALID_CHOICE_MESSAGE}")?;
				return Ok(SessionOutcome::InvalidChoice(invalid));
			}
			Err(other) => return Err(other),
		},
	};

	match selection {
		Selection::Exited => {
			writeln!(out, "Exiting...")?;
			Ok(SessionOutcome::Exited)
		}
		Selection::Aborted(entry) => {
			writeln!(out, "Theme installation aborted.")?;
			Ok(SessionOutcome::Aborted {
				theme: entry.theme.name.clone(),
			})
		}
		Selection::Install(entry) => {
			let theme = entry.theme.name.clone();
			let report = activation::install(layout, entry.scope, entry.theme.dir_name(), out)
				.with_context(|| format!("failed to install theme {theme}"))?;
			Ok(SessionOutcome::Installed {
				theme,
				scope: entry.scope,
				report,
			})
		}
	}
}
