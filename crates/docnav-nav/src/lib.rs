//! Navigation sync for `MkDocs`-style site configuration files.
//!
//! The site configuration is handled as a generic YAML document so that
//! everything outside the managed nav group survives a rewrite: key order,
//! unrelated nav entries, and custom tags such as `!ENV`.
//!
//! Comments and original formatting are not preserved. Documents using
//! `!!` tags outside the YAML core set (e.g. `!!python/name:`) are refused,
//! since the YAML library would drop them on rewrite.

mod error;
mod site_config;
mod tags;

pub use error::NavError;
pub use site_config::{NavChange, NavEntry, SiteConfig, sync_site_config};
