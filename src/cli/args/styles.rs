use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use themelink::{Scope, ThemeLayout, app_dirs};

/// Version banner listing the default locations themes are read from and
/// linked into.
pub(super) fn long_version() -> &'static str {
	Box::leak(version_details().into_boxed_str())
}

fn version_details() -> String {
	let config_file = match app_dirs::get_config_dir() {
		Ok(path) => path.join("config.toml").display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("themelink {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config file: {config_file}");

	match app_dirs::get_home_dir() {
		Ok(home) => {
			let layout = ThemeLayout::from_home(&home);
			let _ = writeln!(details, "user themes: {}", layout.themes_dir(Scope::User).display());
			let _ = writeln!(
				details,
				"system themes: {}",
				layout.themes_dir(Scope::System).display()
			);
			let _ = writeln!(details, "links into: {}", layout.gtk_dir().display());
		}
		Err(err) => {
			let _ = writeln!(details, "default theme paths unavailable ({err})");
		}
	}

	details
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_details_name_the_gtk_target() {
		let details = version_details();
		assert!(details.starts_with(&format!("themelink {}\n", env!("CARGO_PKG_VERSION"))));
		assert!(details.contains("config file: "));
		if app_dirs::get_home_dir().is_ok() {
			assert!(details.contains("gtk-4.0"), "{details}");
			assert!(details.contains(&format!("system themes: {}", themelink::layout::SYSTEM_THEMES_DIR)));
		}
	}
}
