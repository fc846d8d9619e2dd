use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};
use themelink::session::INVALID_CHOICE_MESSAGE;
use themelink::{Scope, SessionOutcome, ThemeLayout, reset, run};

struct Fixture {
	_dir: TempDir,
	layout: ThemeLayout,
}

impl Fixture {
	fn new() -> Self {
		let dir = tempdir().expect("tempdir");
		let layout = ThemeLayout {
			user_themes_dir: dir.path().join("home/.themes"),
			system_themes_dir: dir.path().join("usr/share/themes"),
			config_dir: dir.path().join("home/.config"),
		};
		Self { _dir: dir, layout }
	}

	fn theme(&self, scope: Scope, name: &str, files: &[&str]) -> PathBuf {
		let root = self.layout.themes_dir(scope).join(name);
		fs::create_dir_all(&root).unwrap();
		for file in files {
			let path = root.join(file);
			if file.ends_with('/') {
				fs::create_dir_all(&path).unwrap();
			} else {
				fs::create_dir_all(path.parent().unwrap()).unwrap();
				fs::write(&path, "/* css */").unwrap();
			}
		}
		root
	}

	fn run(&self, input: &str) -> (SessionOutcome, String) {
		let mut out = Vec::new();
		let outcome = run(&self.layout, &mut Cursor::new(input.to_string()), &mut out)
			.expect("session runs");
		(outcome, String::from_utf8(out).expect("utf8"))
	}

	fn config_is_untouched(&self) -> bool {
		!self.layout.config_dir.exists()
	}
}

fn symlinks_under(dir: &Path) -> Vec<PathBuf> {
	let mut links = Vec::new();
	let Ok(entries) = fs::read_dir(dir) else {
		return links;
	};
	for entry in entries {
		let path = entry.unwrap().path();
		let meta = fs::symlink_metadata(&path).unwrap();
		if meta.file_type().is_symlink() {
			links.push(path);
		} else if meta.is_dir() {
			links.extend(symlinks_under(&path));
		}
	}
	links
}

#[test]
fn no_themes_anywhere_prints_notice() {
	let fixture = Fixture::new();

	let (outcome, text) = fixture.run("1\n");

	assert!(matches!(outcome, SessionOutcome::NoThemes));
	assert_eq!(
		text,
		"Neither user themes nor system themes directory was found. Exiting...\n"
	);
	assert!(fixture.config_is_untouched());
}

#[test]
fn empty_roots_count_as_no_themes() {
	let fixture = Fixture::new();
	fs::create_dir_all(&fixture.layout.user_themes_dir).unwrap();
	fs::create_dir_all(&fixture.layout.system_themes_dir).unwrap();

	let (outcome, _) = fixture.run("");

	assert!(matches!(outcome, SessionOutcome::NoThemes));
	assert!(fixture.config_is_untouched());
}

#[test]
fn menu_lists_user_then_system_then_exit() {
	let fixture = Fixture::new();
	fixture.theme(Scope::User, "Mine", &["gtk-4.0/gtk.css"]);
	fixture.theme(Scope::System, "Legacy", &["gtk-3.0/gtk.css"]);

	let (_, text) = fixture.run("q\n");

	assert!(text.starts_with(
		"Select theme:\n\
		 1. Mine (User) - Supported\n\
		 2. Legacy (System) - Not Supported\n\
		 3. Exit (or 'q')\n\
		 Your choice [Exit]: "
	));
}

#[test]
fn every_exit_spelling_leaves_config_alone() {
	let fixture = Fixture::new();
	fixture.theme(Scope::User, "Mine", &["gtk-4.0/gtk.css"]);
	fixture.theme(Scope::System, "Adwaita", &["gtk-4.0/gtk.css"]);

	for input in ["", "\n", "q\n", "EXIT\n", "3\n"] {
		let (outcome, text) = fixture.run(input);
		assert!(matches!(outcome, SessionOutcome::Exited), "{input:?}");
		assert!(text.ends_with("Exiting...\n"), "{input:?}");
		assert!(!outcome.mutated());
	}
	assert!(fixture.config_is_untouched());
}

#[test]
fn invalid_choice_reports_and_does_not_mutate() {
	let fixture = Fixture::new();
	fixture.theme(Scope::User, "One", &["gtk-4.0/gtk.css"]);
	fixture.theme(Scope::System, "Two", &["gtk-4.0/gtk.css"]);
	fixture.theme(Scope::System, "Three", &["gtk-4.0/gtk.css"]);

	for input in ["abc\n", "999\n"] {
		let (outcome, text) = fixture.run(input);
		assert!(matches!(outcome, SessionOutcome::InvalidChoice(_)), "{input:?}");
		assert!(text.ends_with(&format!("{INVALID_CHOICE_MESSAGE}\n")));
	}
	assert!(fixture.config_is_untouched());
}

#[test]
fn declining_an_unsupported_theme_aborts() {
	let fixture = Fixture::new();
	fixture.theme(Scope::User, "Old", &["gtk-3.0/gtk.css", "assets/"]);

	for input in ["1\n\n", "1\nn\n", "1\nyes\n", "1\n"] {
		let (outcome, text) = fixture.run(input);
		assert!(matches!(outcome, SessionOutcome::Aborted { ref theme } if theme == "Old"));
		assert!(text.contains("Theme 'Old' does not have complete GTK 4.0 support."));
		assert!(text.ends_with("Theme installation aborted.\n"));
	}
	assert!(fixture.config_is_untouched());
}

#[test]
fn confirming_an_unsupported_theme_links_what_exists() {
	let fixture = Fixture::new();
	let root = fixture.theme(Scope::User, "Old", &["assets/"]);

	let (outcome, text) = fixture.run("1\ny\n");

	assert!(outcome.mutated());
	assert_eq!(
		fs::read_link(fixture.layout.config_dir.join("assets")).unwrap(),
		root.join("assets")
	);
	assert!(text.contains("Setting theme to: Old\n"));
}

#[test]
fn css_only_theme_creates_one_link_and_reports_partial_success() {
	let fixture = Fixture::new();
	let root = fixture.theme(Scope::System, "Slim", &["gtk-4.0/gtk.css"]);

	let (outcome, text) = fixture.run("1\n");

	let links = symlinks_under(&fixture.layout.config_dir);
	assert_eq!(links, vec![fixture.layout.gtk_dir().join("gtk.css")]);
	assert_eq!(fs::read_link(&links[0]).unwrap(), root.join("gtk-4.0/gtk.css"));
	assert!(text.ends_with(
		"Theme Slim applied, albeit some files might be missing or could not be linked.\n"
	));
	match outcome {
		SessionOutcome::Installed { theme, scope, report } => {
			assert_eq!(theme, "Slim");
			assert_eq!(scope, Scope::System);
			assert_eq!(report.linked.len(), 1);
			assert_eq!(report.skipped.len(), 3);
			assert_eq!(report.failed, 0);
		}
		other => panic!("unexpected outcome: {other:?}"),
	}
}

#[test]
fn system_theme_after_user_themes_resolves_to_system_root() {
	let fixture = Fixture::new();
	fixture.theme(Scope::User, "Mine", &["gtk-4.0/gtk.css"]);
	let system = fixture.theme(
		Scope::System,
		"Full",
		&["gtk-4.0/gtk.css", "gtk-4.0/gtk-dark.css", "gtk-4.0/assets/", "assets/"],
	);

	let (outcome, text) = fixture.run("2\n");

	assert!(matches!(outcome, SessionOutcome::Installed { scope: Scope::System, .. }));
	assert_eq!(
		fs::read_link(fixture.layout.gtk_dir().join("gtk-dark.css")).unwrap(),
		system.join("gtk-4.0/gtk-dark.css")
	);
	assert!(text.ends_with("Theme applied successfully.\n"));
}

#[test]
fn reinstalling_over_existing_links_is_tolerated() {
	let fixture = Fixture::new();
	fixture.theme(
		Scope::User,
		"Full",
		&["gtk-4.0/gtk.css", "gtk-4.0/gtk-dark.css", "gtk-4.0/assets/", "assets/"],
	);

	fixture.run("1\n");
	let (outcome, text) = fixture.run("1\n");

	match outcome {
		SessionOutcome::Installed { report, .. } => assert_eq!(report.failed, 4),
		other => panic!("unexpected outcome: {other:?}"),
	}
	assert!(text.contains("albeit some files might be missing"));
}

#[test]
fn reset_after_install_restores_defaults() {
	let fixture = Fixture::new();
	fixture.theme(
		Scope::User,
		"Full",
		&["gtk-4.0/gtk.css", "gtk-4.0/gtk-dark.css", "gtk-4.0/assets/", "assets/"],
	);
	fixture.run("1\n");

	let mut out = Vec::new();
	let report = reset(&fixture.layout, &mut out).unwrap();

	assert_eq!(report.removed.len(), 4);
	assert!(symlinks_under(&fixture.layout.config_dir).is_empty());
	assert_eq!(String::from_utf8(out).unwrap(), "Resetting to default theme...\n");
}

#[test]
fn reset_without_links_reports_each_path() {
	let fixture = Fixture::new();
	let mut out = Vec::new();

	let report = reset(&fixture.layout, &mut out).unwrap();

	assert_eq!(report.failed.len(), 4);
	let text = String::from_utf8(out).unwrap();
	assert!(text.starts_with("Resetting to default theme...\n"));
	for target in fixture.layout.reset_targets() {
		assert!(text.contains(&target.display().to_string()));
	}
}

#[test]
fn non_utf8_choice_is_reported_as_invalid() {
	let fixture = Fixture::new();
	fixture.theme(Scope::User, "Mine", &["gtk-4.0/gtk.css"]);

	let mut out = Vec::new();
	let outcome = run(&fixture.layout, &mut Cursor::new(vec![0xff, 0xfe, b'\n']), &mut out)
		.expect("invalid bytes end the session normally");

	assert!(matches!(outcome, SessionOutcome::InvalidChoice(_)));
	let text = String::from_utf8(out).unwrap();
	assert!(text.ends_with(&format!("{INVALID_CHOICE_MESSAGE}\n")));
	assert!(fixture.config_is_untouched());
}

#[test]
fn non_utf8_theme_directory_is_linked_by_its_real_name() {
	use std::ffi::OsStr;
	use std::os::unix::ffi::OsStrExt;

	let fixture = Fixture::new();
	let root = fixture
		.layout
		.user_themes_dir
		.join(OsStr::from_bytes(b"Th\xffeme"));
	fs::create_dir_all(root.join("gtk-4.0")).unwrap();
	fs::write(root.join("gtk-4.0/gtk.css"), "/* css */").unwrap();

	let (outcome, text) = fixture.run("1\n");

	match outcome {
		SessionOutcome::Installed { report, .. } => {
			assert_eq!(report.linked, vec![fixture.layout.gtk_dir().join("gtk.css")]);
			assert_eq!(report.failed, 0);
		}
		other => panic!("unexpected outcome: {other:?}"),
	}
	assert_eq!(
		fs::read_link(fixture.layout.gtk_dir().join("gtk.css")).unwrap(),
		root.join("gtk-4.0/gtk.css")
	);
	assert!(text.contains("1. Th\u{fffd}eme (User) - Supported\n"));
}
