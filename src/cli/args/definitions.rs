use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `themelink` binary.
#[derive(Parser, Debug)]
#[command(
	name = "themelink",
	version,
	long_version = long_version(),
	about = "Link an installed theme into ~/.config/gtk-4.0, or reset to the GTK default",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		long,
		help = "Remove the theme links and fall back to the default theme"
	)]
	pub(crate) reset: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List discovered themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how --list-themes prints the catalog"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "THEMELINK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading the default configuration file (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "PATH",
		help = "Home directory the default paths derive from (default: $HOME)"
	)]
	pub(crate) home: Option<PathBuf>,
	#[arg(
		long = "user-themes-dir",
		value_name = "PATH",
		help = "Directory holding per-user themes (default: ~/.themes)"
	)]
	pub(crate) user_themes_dir: Option<PathBuf>,
	#[arg(
		long = "system-themes-dir",
		value_name = "PATH",
		help = "Directory holding system-wide themes (default: /usr/share/themes)"
	)]
	pub(crate) system_themes_dir: Option<PathBuf>,
	#[arg(
		long = "config-dir",
		value_name = "PATH",
		help = "Configuration directory that receives gtk-4.0 links (default: ~/.config)"
	)]
	pub(crate) config_dir: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved paths before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	/// Positional arguments carry no meaning and are accepted so that
	/// `--reset` is honoured wherever it appears.
	#[arg(hide = true, value_name = "IGNORED")]
	pub(crate) ignored: Vec<String>,
}
