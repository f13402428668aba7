use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use msel::app_dirs;
use msel::core::{MultiSelectConfig, OptionItem};
use msel::sources::{demo_catalog, demo_defaults, load_catalog};
use msel::ui::theme::{self, DEFAULT_THEME};
use msel::{AppConfig, Theme};
use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_FIELD_NAME: &str = "selection";
const DEFAULT_PLACEHOLDER: &str = "Choose...";
const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	widget: WidgetSection,
	ui: UiSection,
	catalog: CatalogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WidgetSection {
	field_name: Option<String>,
	placeholder: Option<String>,
	search_placeholder: Option<String>,
	default_selection: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	file: Option<PathBuf>,
}

pub struct ResolvedConfig {
	/// `None` when the built-in department list is used.
	pub catalog_file: Option<PathBuf>,
	pub catalog: Vec<OptionItem>,
	pub default_selection: Vec<String>,
	pub field_name: String,
	pub placeholder: String,
	pub search_placeholder: String,
	pub theme_name: String,
	pub theme: Theme,
	pub title: Option<String>,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		match &self.catalog_file {
			Some(path) => println!("  Catalog: {}", path.display()),
			None => println!("  Catalog: (built-in departments)"),
		}
		println!("  Options: {}", self.catalog.len());
		if self.default_selection.is_empty() {
			println!("  Default selection: (none)");
		} else {
			println!("  Default selection: {}", self.default_selection.join(", "));
		}
		println!("  Field name: {}", self.field_name);
		println!("  Placeholder: {}", self.placeholder);
		println!("  Search placeholder: {}", self.search_placeholder);
		println!("  UI theme: {}", self.theme_name);
		if let Some(title) = &self.title {
			println!("  Title: {title}");
		}
	}

	/// Widget and presentation settings for the terminal host.
	///
	/// Defaults are matched to catalog entries by value. Values the catalog
	/// lacks are passed through so the widget can report and drop them.
	pub fn app_config(&self) -> AppConfig {
		let defaults = self
			.default_selection
			.iter()
			.map(|value| {
				self.catalog
					.iter()
					.find(|opt| &opt.value == value)
					.cloned()
					.unwrap_or_else(|| OptionItem::new(value.clone(), value.clone()))
			})
			.collect();

		let widget = MultiSelectConfig::new(self.catalog.clone())
			.with_default_selection(defaults)
			.with_field_name(self.field_name.clone())
			.with_placeholder(self.placeholder.clone())
			.with_search_placeholder(self.search_placeholder.clone());

		AppConfig {
			widget,
			theme: self.theme,
			title: self.title.clone(),
		}
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("msel")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("widget.default_selection"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".msel.toml"));
		files.push(current_dir.join("msel.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.catalog.file = Some(path);
		}
		if !cli.defaults.is_empty() {
			self.widget.default_selection = Some(cli.defaults.clone());
		}
		if let Some(name) = cli.field_name.clone() {
			self.widget.field_name = Some(name);
		}
		if let Some(text) = cli.placeholder.clone() {
			self.widget.placeholder = Some(text);
		}
		if let Some(text) = cli.search_placeholder.clone() {
			self.widget.search_placeholder = Some(text);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let (catalog, fallback_defaults) = match &self.catalog.file {
			Some(path) => (load_catalog(path)?, Vec::new()),
			None => (demo_catalog(), demo_defaults()),
		};
		if catalog.is_empty() {
			tracing::warn!("catalog has no options");
		}
		let default_selection = self
			.widget
			.default_selection
			.map(sanitize_values)
			.unwrap_or(fallback_defaults);

		let field_name = self
			.widget
			.field_name
			.unwrap_or_else(|| DEFAULT_FIELD_NAME.to_string());
		let field_name = field_name.trim().to_string();
		ensure!(!field_name.is_empty(), "widget.field_name must not be empty");

		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let Some(theme) = theme::by_name(&theme_name) else {
			bail!(
				"unknown theme '{theme_name}' (available: {})",
				theme::names().join(", ")
			);
		};

		let title = self
			.ui
			.title
			.map(|title| title.trim().to_string())
			.filter(|title| !title.is_empty());

		Ok(ResolvedConfig {
			catalog_file: self.catalog.file,
			catalog,
			default_selection,
			field_name,
			placeholder: self
				.widget
				.placeholder
				.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
			search_placeholder: self
				.widget
				.search_placeholder
				.unwrap_or_else(|| DEFAULT_SEARCH_PLACEHOLDER.to_string()),
			theme_name,
			theme,
			title,
		})
	}
}

fn sanitize_values(values: Vec<String>) -> Vec<String> {
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
		.collect()
}
