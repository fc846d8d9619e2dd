//! Menu choice parsing and the confirmation step for unsupported themes.
//!
//! The flow is a small state machine: the choice prompt either exits,
//! resolves to a theme, or fails; a resolved theme without GTK 4 support
//! passes through a confirmation prompt that defaults to "no".

use std::io::{self, BufRead, Write};

use crate::catalog::{CatalogEntry, ThemeCatalog};
use crate::error::SelectionError;

pub const CHOICE_PROMPT: &str = "Your choice [Exit]: ";
pub const CONFIRM_PROMPT: &str = "Do you want to continue? (y/n) [n]: ";

const EXIT_KEYWORDS: [&str; 2] = ["exit", "q"];

/// Result of interpreting the text typed at the choice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<'a> {
	Exit,
	Theme(&'a CatalogEntry),
}

/// Terminal state of the selection flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
	/// The user picked the exit option.
	Exited,
	/// The user declined to install an unsupported theme.
	Aborted(&'a CatalogEntry),
	/// The theme should be installed.
	Install(&'a CatalogEntry),
}

enum State<'a> {
	AwaitingInput,
	Confirming(&'a CatalogEntry),
	Resolved(&'a CatalogEntry),
	Done(Selection<'a>),
}

fn normalize(line: &str) -> String {
	line.trim().to_lowercase()
}

/// Interpret one line typed at the choice prompt.
pub fn parse_choice<'a>(
	line: &str,
	catalog: &'a ThemeCatalog,
) -> Result<Choice<'a>, SelectionError> {
	let normalized = normalize(line);
	let exit_index = catalog.exit_index();

	if normalized.is_empty()
		|| EXIT_KEYWORDS.contains(&normalized.as_str())
		|| normalized == exit_index.to_string()
	{
		return Ok(Choice::Exit);
	}

	normalized
		.parse::<usize>()
		.ok()
		.and_then(|index| catalog.get(index))
		.map(Choice::Theme)
		.ok_or_else(|| SelectionError::InvalidChoice {
			input: line.trim().to_string(),
			max: catalog.len(),
		})
}

/// Only an explicit `y` confirms.
pub fn is_confirmed(line: &str) -> bool {
	normalize(line) == "y"
}

/// Print `prompt` and read one line. End of input reads as an empty line.
///
/// Bytes that are not UTF-8 are replaced rather than failing the read, so
/// they reach the parser and are rejected like any other bad answer.
fn prompt_line<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> io::Result<String> {
	write!(out, "{prompt}")?;
	out.flush()?;
	let mut line = Vec::new();
	input.read_until(b'\n', &mut line)?;
	Ok(String::from_utf8_lossy(&line).into_owned())
}

/// Drive the prompts until the user exits, aborts, or commits to a theme.
///
/// An invalid choice ends the flow with [`SelectionError`] rather than
/// prompting again.
pub fn select<'a, R: BufRead, W: Write>(
	catalog: &'a ThemeCatalog,
	input: &mut R,
	out: &mut W,
) -> anyhow::Result<Selection<'a>> {
	let mut state = State::AwaitingInput;

	loop {
		state = match state {
			State::AwaitingInput => {
				let line = prompt_line(CHOICE_PROMPT, input, out)?;
				match parse_choice(&line, catalog)? {
					Choice::Exit => State::Done(Selection::Exited),
					Choice::Theme(entry) => State::Resolved(entry),
				}
			}
			State::Resolved(entry) if !entry.theme.supported => {
				writeln!(
					out,
					"Theme '{}' does not have complete GTK 4.0 support. Proceed with caution!",
					entry.theme.name
				)?;
				State::Confirming(entry)
			}
			State::Resolved(entry) => State::Done(Selection::Install(entry)),
			State::Confirming(entry) => {
				let answer = prompt_line(CONFIRM_PROMPT, input, out)?;
				if is_confirmed(&answer) {
					State::Done(Selection::Install(entry))
				} else {
					State::Done(Selection::Aborted(entry))
				}
			}
			State::Done(selection) => return Ok(selection),
		};
	}
}
