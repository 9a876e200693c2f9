//! Navigation sync errors.

use std::path::PathBuf;

/// Error raised while reading, updating or writing the site configuration.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Reading or writing the file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Site configuration path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A `!!` tag that would be lost when the document is rewritten.
    #[error("Unsupported YAML tag `!!{0}`: rewriting the file would drop it")]
    UnsupportedTag(String),
    /// Document root is not a mapping.
    #[error("Site configuration must be a YAML mapping")]
    NotAMapping,
    /// `nav` exists but is not a list.
    #[error("`nav` must be a list")]
    NavNotASequence,
    /// The managed group exists but does not hold a list.
    #[error("nav entry `{0}` must be a list of pages")]
    GroupNotASequence(String),
}
