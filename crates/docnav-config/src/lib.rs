//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `docs.group`
//! - `sections[].title`

mod expand;

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs directory.
    pub docs_dir: Option<PathBuf>,
    /// Override the managed group name.
    pub group: Option<String>,
    /// Override site configuration file path.
    pub site_config: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Site configuration location (relative string from TOML).
    site: SiteConfigRaw,
    /// Placeholder file configuration.
    pub placeholder: PlaceholderConfig,
    /// Ordered list of managed sections.
    pub sections: Vec<SectionConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    dir: Option<String>,
    group: Option<String>,
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    config: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// `MkDocs` `docs_dir`.
    pub docs_dir: PathBuf,
    /// Group name: sub-folder of `docs_dir` and top-level nav key.
    pub group: String,
    /// Site configuration file (`mkdocs.yml`).
    pub site_config: PathBuf,
}

impl DocsConfig {
    /// Directory holding the group's section folders.
    #[must_use]
    pub fn group_dir(&self) -> PathBuf {
        self.docs_dir.join(&self.group)
    }
}

/// Placeholder file configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Placeholder filename created inside every section folder.
    pub filename: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            filename: "index.md".to_owned(),
        }
    }
}

/// A single managed section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionConfig {
    /// Folder name, also used in the nav target path.
    pub key: String,
    /// Display title for the placeholder heading and nav label.
    pub title: String,
}

impl SectionConfig {
    fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_owned(),
            title: title.to_owned(),
        }
    }
}

/// Sections used when the config file does not list any.
#[must_use]
pub fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new("overview", "Обзор"),
        SectionConfig::new("commands", "Команды"),
        SectionConfig::new("setup", "Установка"),
        SectionConfig::new("container", "Создание и запуск контейнера"),
        SectionConfig::new("image_optimization", "Оптимизация и настройка образа"),
        SectionConfig::new("filesystem", "Файловая система"),
        SectionConfig::new("networking", "Сети"),
        SectionConfig::new("security", "Безопасность"),
        SectionConfig::new("compose", "Docker Compose"),
    ]
}

const DEFAULT_DOCS_DIR: &str = "docs";
const DEFAULT_GROUP: &str = "Docker";
const DEFAULT_SITE_CONFIG: &str = "mkdocs.yml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.group`").
        field: String,
        /// Error message (e.g., "${`DOCS_GROUP`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a string field to be exactly one normal path component.
fn require_path_segment(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;

    let mut components = Path::new(value).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || value.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "{field} must be a single folder name, got {value:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. Validation runs
    /// last so overridden values are checked too.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(docs_dir) = &settings.docs_dir {
            self.docs_resolved.docs_dir.clone_from(docs_dir);
        }
        if let Some(group) = &settings.group {
            self.docs_resolved.group.clone_from(group);
        }
        if let Some(site_config) = &settings.site_config {
            self.docs_resolved.site_config.clone_from(site_config);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file starting at `start` and walking up.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            site: SiteConfigRaw::default(),
            placeholder: PlaceholderConfig::default(),
            sections: default_sections(),
            docs_resolved: DocsConfig {
                docs_dir: base.join(DEFAULT_DOCS_DIR),
                group: DEFAULT_GROUP.to_owned(),
                site_config: base.join(DEFAULT_SITE_CONFIG),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_path_segment(&self.docs_resolved.group, "docs.group")?;
        require_path_segment(&self.placeholder.filename, "placeholder.filename")?;
        self.validate_sections()
    }

    /// Validate the section list.
    fn validate_sections(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[sections]] entry is required".to_owned(),
            ));
        }

        let mut keys = HashSet::new();
        let mut titles = HashSet::new();
        for section in &self.sections {
            require_path_segment(&section.key, "sections.key")?;
            require_non_empty(&section.title, "sections.title")?;
            if !keys.insert(section.key.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate section key {:?}",
                    section.key
                )));
            }
            if !titles.insert(section.title.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate section title {:?}",
                    section.title
                )));
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref group) = self.docs.group {
            self.docs.group = Some(expand::expand_env(group, "docs.group")?);
        }

        for section in &mut self.sections {
            section.title = expand::expand_env(&section.title, "sections.title")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            docs_dir: resolve(self.docs.dir.as_deref(), DEFAULT_DOCS_DIR),
            group: self
                .docs
                .group
                .clone()
                .unwrap_or_else(|| DEFAULT_GROUP.to_owned()),
            site_config: resolve(self.site.config.as_deref(), DEFAULT_SITE_CONFIG),
        };
    }
}
