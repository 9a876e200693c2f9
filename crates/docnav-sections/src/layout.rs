//! Mapping of sections to filesystem paths and nav targets.

use std::path::PathBuf;

/// A documentation section: folder key plus display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Folder name (e.g., "overview").
    pub key: String,
    /// Display title (e.g., "Overview").
    pub title: String,
}

impl Section {
    /// Create a new section.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Where a group's sections live on disk.
///
/// For docs dir `docs`, group `Docker` and placeholder `index.md`, the
/// section `overview` maps to `docs/Docker/overview/index.md` and to the
/// nav target `Docker/overview/index.md`.
#[derive(Debug, Clone)]
pub struct SectionLayout {
    docs_dir: PathBuf,
    group: String,
    placeholder: String,
}

impl SectionLayout {
    /// Create a layout for `group` inside `docs_dir`.
    #[must_use]
    pub fn new(
        docs_dir: impl Into<PathBuf>,
        group: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            group: group.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Group name.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Directory holding all section folders of the group.
    #[must_use]
    pub fn group_dir(&self) -> PathBuf {
        self.docs_dir.join(&self.group)
    }

    /// Folder of a single section.
    #[must_use]
    pub fn section_dir(&self, section: &Section) -> PathBuf {
        self.group_dir().join(&section.key)
    }

    /// Placeholder file of a single section.
    #[must_use]
    pub fn placeholder_path(&self, section: &Section) -> PathBuf {
        self.section_dir(section).join(&self.placeholder)
    }

    /// Nav target of a section, relative to the docs dir.
    ///
    /// Always `/`-separated regardless of platform.
    #[must_use]
    pub fn nav_target(&self, section: &Section) -> String {
        format!("{}/{}/{}", self.group, section.key, self.placeholder)
    }
}

/// Body written into a freshly created placeholder file.
#[must_use]
pub fn placeholder_content(title: &str) -> String {
    format!("# {title}\n\n")
}
