//! CLI error types.

use docnav_config::ConfigError;
use docnav_nav::NavError;
use docnav_sections::SectionError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Section(#[from] SectionError),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    OutOfDate(String),
}
