use anyhow::Result;
use serde_json::json;
use themelink::ThemeCatalog;

/// Print one line per discovered theme.
pub(crate) fn print_plain(catalog: &ThemeCatalog) {
	if catalog.is_empty() {
		println!("No themes found");
		return;
	}

	for entry in catalog.entries() {
		println!(
			"{}\t{}\t{}",
			entry.theme.name,
			entry.scope,
			entry.theme.support_label()
		);
	}
}

/// Format the catalog as a JSON string.
pub(crate) fn format_catalog_json(catalog: &ThemeCatalog) -> Result<String> {
	let payload = json!({
		"user": catalog.user_count(),
		"system": catalog.system_count(),
		"themes": catalog.entries(),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the catalog.
pub(crate) fn print_json(catalog: &ThemeCatalog) -> Result<()> {
	println!("{}", format_catalog_json(catalog)?);
	Ok(())
}
