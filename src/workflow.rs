use std::io::{self, Write};

use anyhow::{Context, Result};
use themelink::{SessionOutcome, ThemeCatalog, ThemeLayout, activation, catalog, session};

use crate::settings::ResolvedConfig;

/// Coordinates the reset, listing and interactive paths against one layout.
pub(crate) struct ThemeWorkflow {
	layout: ThemeLayout,
}

impl ThemeWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self {
			layout: config.layout,
		}
	}

	pub(crate) fn catalog(&self) -> Result<ThemeCatalog> {
		catalog::discover(&self.layout).context("failed to discover themes")
	}

	/// Remove the links. Individual failures are printed, never returned.
	pub(crate) fn reset(self) -> Result<()> {
		let mut stdout = io::stdout().lock();
		let report = activation::reset(&self.layout, &mut stdout)?;
		stdout.flush()?;
		tracing::debug!(
			removed = report.removed.len(),
			failed = report.failed.len(),
			"reset finished"
		);
		Ok(())
	}

	pub(crate) fn run_interactive(self) -> Result<()> {
		let mut stdin = io::stdin().lock();
		let mut stdout = io::stdout().lock();
		let outcome = session::run(&self.layout, &mut stdin, &mut stdout)?;
		stdout.flush()?;

		if let SessionOutcome::Installed { report, .. } = &outcome {
			tracing::debug!(
				linked = report.linked.len(),
				skipped = report.skipped.len(),
				failed = report.failed,
				"install finished"
			);
		}
		Ok(())
	}
}
