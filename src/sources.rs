//! Where the option catalog comes from: a JSON file, stdin, or the built-in
//! department list.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use msel_core::OptionItem;

const DEMO_DEPARTMENTS: &[(&str, &str)] = &[
	("Facilities", "facilities"),
	("Finance", "finance"),
	("Front Office", "front_office"),
	("Human Resources", "human_resources"),
	("IT", "it"),
	("Management Team", "management_team"),
	("Planning", "planning"),
	("Sales", "sales"),
];

const DEMO_DEFAULTS: &[&str] = &["management_team", "sales"];

/// Built-in department catalog used when no catalog file is configured.
#[must_use]
pub fn demo_catalog() -> Vec<OptionItem> {
	DEMO_DEPARTMENTS
		.iter()
		.map(|(name, value)| OptionItem::new(*name, *value))
		.collect()
}

/// Values preselected with the demo catalog.
#[must_use]
pub fn demo_defaults() -> Vec<String> {
	DEMO_DEFAULTS.iter().map(|value| (*value).to_string()).collect()
}

/// Load a JSON array of `{ "name": .., "value": .. }` objects.
///
/// The path `-` reads from stdin.
pub fn load_catalog(path: &Path) -> Result<Vec<OptionItem>> {
	if path == Path::new("-") {
		return parse_catalog(io::stdin().lock()).context("failed to read catalog from stdin");
	}

	let file = File::open(path)
		.with_context(|| format!("failed to open catalog file {}", path.display()))?;
	parse_catalog(BufReader::new(file))
		.with_context(|| format!("failed to parse catalog file {}", path.display()))
}

fn parse_catalog<R: Read>(reader: R) -> Result<Vec<OptionItem>> {
	let options: Vec<OptionItem> = serde_json::from_reader(reader)?;
	Ok(options)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;

	#[test]
	fn demo_defaults_are_in_the_demo_catalog() {
		let catalog = demo_catalog();
		for value in demo_defaults() {
			assert!(catalog.iter().any(|opt| opt.value == value), "{value}");
		}
	}

	#[test]
	fn loads_catalog_from_json_file() {
		let mut file = NamedTempFile::new().expect("temp file");
		write!(
			file,
			r#"[{{"name": "Red", "value": "red"}}, {{"name": "Blue", "value": "blue"}}]"#
		)
		.expect("write catalog");

		let catalog = load_catalog(file.path()).expect("catalog loads");
		assert_eq!(
			catalog,
			[OptionItem::new("Red", "red"), OptionItem::new("Blue", "blue")]
		);
	}

	#[test]
	fn malformed_catalog_reports_the_path() {
		let mut file = NamedTempFile::new().expect("temp file");
		write!(file, r#"{{"name": "Red"}}"#).expect("write catalog");

		let err = load_catalog(file.path()).unwrap_err();
		assert!(format!("{err:#}").contains("failed to parse catalog file"));
	}
}
