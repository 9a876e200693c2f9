//! Shared project arguments and resolved project layout.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_nav::NavEntry;
use docnav_sections::{Section, SectionLayout};

use crate::error::CliError;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long, env = "DOCNAV_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Documentation directory (overrides config).
    #[arg(long)]
    pub(crate) docs_dir: Option<PathBuf>,

    /// Managed group: docs sub-folder and nav key (overrides config).
    #[arg(long)]
    pub(crate) group: Option<String>,

    /// Site configuration file, e.g. mkdocs.yml (overrides config).
    #[arg(long)]
    pub(crate) site_config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ProjectArgs {
    /// Load configuration and resolve the project layout.
    pub(crate) fn load(&self) -> Result<Project, CliError> {
        let cli_settings = CliSettings {
            docs_dir: self.docs_dir.clone(),
            group: self.group.clone(),
            site_config: self.site_config.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(Project::from_config(&config))
    }

    #[cfg(test)]
    pub(crate) fn for_config(config: PathBuf) -> Self {
        Self {
            config: Some(config),
            docs_dir: None,
            group: None,
            site_config: None,
            verbose: false,
        }
    }
}

/// Sections resolved against the docs directory.
pub(crate) struct Project {
    pub(crate) layout: SectionLayout,
    pub(crate) sections: Vec<Section>,
    pub(crate) site_config: PathBuf,
}

impl Project {
    fn from_config(config: &Config) -> Self {
        let docs = &config.docs_resolved;
        Self {
            layout: SectionLayout::new(
                docs.docs_dir.clone(),
                docs.group.clone(),
                config.placeholder.filename.clone(),
            ),
            sections: config
                .sections
                .iter()
                .map(|s| Section::new(s.key.clone(), s.title.clone()))
                .collect(),
            site_config: docs.site_config.clone(),
        }
    }

    /// Nav items for all sections, in section order.
    pub(crate) fn nav_entries(&self) -> Vec<NavEntry> {
        self.sections
            .iter()
            .map(|s| NavEntry::new(s.title.clone(), self.layout.nav_target(s)))
            .collect()
    }

    pub(crate) fn group(&self) -> &str {
        self.layout.group()
    }
}
