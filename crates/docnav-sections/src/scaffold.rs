//! Creation of section folders and placeholder files.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::SectionError;
use crate::layout::{Section, SectionLayout, placeholder_content};

/// Per-section scaffolding outcome.
///
/// In a plan the flags mean "would be created".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStatus {
    /// Section key.
    pub key: String,
    /// Section folder was (or would be) created.
    pub dir_created: bool,
    /// Placeholder file was (or would be) created.
    pub placeholder_created: bool,
}

/// Scaffolding outcome for all sections, in section order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// One entry per section.
    pub sections: Vec<SectionStatus>,
}

impl ScaffoldReport {
    /// True when nothing was (or would be) created.
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        self.sections
            .iter()
            .all(|s| !s.dir_created && !s.placeholder_created)
    }

    /// Number of folders created.
    #[must_use]
    pub fn created_dirs(&self) -> usize {
        self.sections.iter().filter(|s| s.dir_created).count()
    }

    /// Number of placeholder files created.
    #[must_use]
    pub fn created_placeholders(&self) -> usize {
        self.sections.iter().filter(|s| s.placeholder_created).count()
    }
}

/// What exists on disk for a path.
enum Presence {
    Missing,
    Dir,
    File,
}

fn presence(path: &Path) -> Result<Presence, SectionError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(Presence::Dir),
        Ok(_) => Ok(Presence::File),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Presence::Missing),
        Err(e) => Err(SectionError::io(path, e)),
    }
}

/// Inspect a section without modifying anything.
fn inspect(layout: &SectionLayout, section: &Section) -> Result<SectionStatus, SectionError> {
    let dir = layout.section_dir(section);
    let dir_missing = match presence(&dir)? {
        Presence::Missing => true,
        Presence::Dir => false,
        Presence::File => return Err(SectionError::NotADirectory(dir)),
    };

    let placeholder_missing = if dir_missing {
        true
    } else {
        let file = layout.placeholder_path(section);
        match presence(&file)? {
            Presence::Missing => true,
            Presence::File => false,
            Presence::Dir => return Err(SectionError::NotAFile(file)),
        }
    };

    Ok(SectionStatus {
        key: section.key.clone(),
        dir_created: dir_missing,
        placeholder_created: placeholder_missing,
    })
}

/// Report which folders and placeholders are missing, without writing.
///
/// # Errors
///
/// Returns an error if a path has the wrong kind (file vs directory) or
/// cannot be inspected.
pub fn plan_sections(
    layout: &SectionLayout,
    sections: &[Section],
) -> Result<ScaffoldReport, SectionError> {
    let sections = sections
        .iter()
        .map(|section| inspect(layout, section))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ScaffoldReport { sections })
}

/// Create missing section folders and placeholder files in order.
///
/// Existing placeholders are left untouched.
///
/// # Errors
///
/// Returns an error if a path has the wrong kind or an I/O operation fails.
/// Sections processed before the failure stay created.
pub fn ensure_sections(
    layout: &SectionLayout,
    sections: &[Section],
) -> Result<ScaffoldReport, SectionError> {
    let mut report = ScaffoldReport::default();

    for section in sections {
        let status = inspect(layout, section)?;

        if status.dir_created {
            let dir = layout.section_dir(section);
            fs::create_dir_all(&dir).map_err(|e| SectionError::io(&dir, e))?;
            tracing::info!(path = %dir.display(), "Created section directory");
        }

        if status.placeholder_created {
            write_placeholder(&layout.placeholder_path(section), &section.title)?;
        } else {
            tracing::debug!(key = %section.key, "Placeholder already exists");
        }

        report.sections.push(status);
    }

    Ok(report)
}

/// Write a placeholder, refusing to replace a file that appeared meanwhile.
fn write_placeholder(path: &Path, title: &str) -> Result<(), SectionError> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "Placeholder appeared concurrently, skipping");
            return Ok(());
        }
        Err(e) => return Err(SectionError::io(path, e)),
    };

    file.write_all(placeholder_content(title).as_bytes())
        .map_err(|e| SectionError::io(path, e))?;
    tracing::info!(path = %path.display(), "Created placeholder");
    Ok(())
}
