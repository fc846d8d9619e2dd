use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.home {
		Some(home) => println!("  Home: {}", home.display()),
		None => println!("  Home: (not needed)"),
	}
	let layout = &config.layout;
	println!("  User themes: {}", layout.user_themes_dir.display());
	println!("  System themes: {}", layout.system_themes_dir.display());
	println!("  Config directory: {}", layout.config_dir.display());
	println!("  GTK directory: {}", layout.gtk_dir().display());
}
