//! Section folder scaffolding for docnav.
//!
//! A section is a documentation topic backed by a folder under the group
//! directory and a placeholder index file inside it. This crate provides:
//!
//! - [`Section`] and [`SectionLayout`] for mapping sections to paths and
//!   nav targets
//! - [`ensure_sections`] to create missing folders and placeholders
//! - [`plan_sections`] to compute the same report without writing
//!
//! Existing files are never overwritten.
//!
//! # Example
//!
//! ```ignore
//! use docnav_sections::{Section, SectionLayout, ensure_sections};
//!
//! let layout = SectionLayout::new("docs", "Docker", "index.md");
//! let sections = vec![Section::new("overview", "Overview")];
//! let report = ensure_sections(&layout, &sections)?;
//! ```

mod error;
mod layout;
mod scaffold;

pub use error::SectionError;
pub use layout::{Section, SectionLayout, placeholder_content};
pub use scaffold::{ScaffoldReport, SectionStatus, ensure_sections, plan_sections};
