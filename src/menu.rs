use std::io::{self, Write};

use crate::catalog::ThemeCatalog;

/// Printed instead of the menu when neither root produced a theme.
pub const NO_THEMES_MESSAGE: &str =
	"Neither user themes nor system themes directory was found. Exiting...";

/// Write the numbered theme list followed by the exit option.
pub fn render<W: Write>(catalog: &ThemeCatalog, out: &mut W) -> io::Result<()> {
	writeln!(out, "Select theme:")?;
	for (offset, entry) in catalog.entries().iter().enumerate() {
		writeln!(
			out,
			"{}. {} ({}) - {}",
			offset + 1,
			entry.theme.name,
			entry.scope,
			entry.theme.support_label()
		)?;
	}
	writeln!(out, "{}. Exit (or 'q')", catalog.exit_index())
}
