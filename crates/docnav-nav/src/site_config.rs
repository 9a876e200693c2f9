//! Read-modify-write of the `nav` list in a site configuration file.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::NavError;
use crate::tags::find_unsupported_tag;

/// Top-level key of the navigation list.
const NAV_KEY: &str = "nav";

/// One managed nav item: `{title: target}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Display label.
    pub title: String,
    /// Page path relative to the docs dir.
    pub target: String,
}

impl NavEntry {
    /// Create a new nav entry.
    #[must_use]
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: target.into(),
        }
    }

    fn to_value(&self) -> Value {
        let mut item = Mapping::new();
        item.insert(
            Value::String(self.title.clone()),
            Value::String(self.target.clone()),
        );
        Value::Mapping(item)
    }

    /// Read a `{title: target}` item, ignoring anything else.
    fn from_value(value: &Value) -> Option<Self> {
        let mapping = value.as_mapping()?;
        if mapping.len() != 1 {
            return None;
        }
        let (title, target) = mapping.iter().next()?;
        Some(Self::new(title.as_str()?, target.as_str()?))
    }
}

/// Outcome of syncing a nav group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavChange {
    /// The group was missing and has been appended to `nav`.
    Created,
    /// The group existed and its items were replaced.
    Updated,
    /// The group already matched.
    Unchanged,
}

impl NavChange {
    /// True if the document was modified.
    #[must_use]
    pub fn is_changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A parsed site configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    root: Value,
}

impl SiteConfig {
    /// Parse a site configuration from YAML text.
    ///
    /// An empty document is treated as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnsupportedTag`] if the text uses a `!!` tag
    /// outside the YAML core set, or [`NavError::Yaml`] if it is not valid
    /// YAML.
    pub fn parse(content: &str) -> Result<Self, NavError> {
        if let Some(tag) = find_unsupported_tag(content) {
            return Err(NavError::UnsupportedTag(tag));
        }
        let root: Value = serde_yaml::from_str(content)?;
        let root = if root.is_null() {
            Value::Mapping(Mapping::new())
        } else {
            root
        };
        Ok(Self { root })
    }

    /// Load a site configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(|source| NavError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Serialize the document back to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Yaml`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, NavError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Write the document to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = self.to_yaml_string()?;
        std::fs::write(path, content).map_err(|source| NavError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Items of the nav group `group`, if the group exists.
    ///
    /// Items that are not `{title: target}` pairs are skipped.
    #[must_use]
    pub fn group_entries(&self, group: &str) -> Option<Vec<NavEntry>> {
        let nav = self.root.get(NAV_KEY)?.as_sequence()?;
        let items = nav
            .iter()
            .find_map(|item| item.as_mapping()?.get(group))?;
        Some(
            items
                .as_sequence()
                .map(|seq| seq.iter().filter_map(NavEntry::from_value).collect())
                .unwrap_or_default(),
        )
    }

    /// Replace the items of nav group `group` with `entries`, in order.
    ///
    /// The group is the first mapping item of `nav` that has `group` as a
    /// key. When absent, `{group: [...]}` is appended to the end of `nav`;
    /// when `nav` itself is absent it is created. Nothing else in the
    /// document is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the document, `nav`, or the group has an
    /// unexpected shape.
    pub fn sync_group(&mut self, group: &str, entries: &[NavEntry]) -> Result<NavChange, NavError> {
        let root = self.root.as_mapping_mut().ok_or(NavError::NotAMapping)?;

        if root.get(NAV_KEY).is_none_or(Value::is_null) {
            tracing::debug!("Site configuration has no nav, creating it");
            root.insert(Value::String(NAV_KEY.to_owned()), Value::Sequence(Vec::new()));
        }
        let nav = root
            .get_mut(NAV_KEY)
            .and_then(Value::as_sequence_mut)
            .ok_or(NavError::NavNotASequence)?;

        let desired = Value::Sequence(entries.iter().map(NavEntry::to_value).collect());

        if let Some(slot) = nav
            .iter_mut()
            .find_map(|item| item.as_mapping_mut()?.get_mut(group))
        {
            if !(slot.is_sequence() || slot.is_null()) {
                return Err(NavError::GroupNotASequence(group.to_owned()));
            }
            if *slot == desired {
                return Ok(NavChange::Unchanged);
            }
            *slot = desired;
            return Ok(NavChange::Updated);
        }

        let mut item = Mapping::new();
        item.insert(Value::String(group.to_owned()), desired);
        nav.push(Value::Mapping(item));
        Ok(NavChange::Created)
    }
}

/// Sync nav group `group` in the site configuration at `path`.
///
/// The file is rewritten only when the group changed and `write` is true,
/// so a `write = false` call acts as a dry run.
///
/// # Errors
///
/// Returns an error if loading, syncing, or saving fails.
pub fn sync_site_config(
    path: &Path,
    group: &str,
    entries: &[NavEntry],
    write: bool,
) -> Result<NavChange, NavError> {
    let mut config = SiteConfig::load(path)?;
    let change = config.sync_group(group, entries)?;

    if change.is_changed() && write {
        config.save(path)?;
        tracing::info!(path = %path.display(), group, ?change, "Updated site navigation");
    } else {
        tracing::debug!(path = %path.display(), group, ?change, "Site navigation not written");
    }

    Ok(change)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn docker_entries() -> Vec<NavEntry> {
        vec![
            NavEntry::new("Обзор", "Docker/overview/index.md"),
            NavEntry::new("Команды", "Docker/commands/index.md"),
        ]
    }

    fn yaml(content: &str) -> Value {
        serde_yaml::from_str(content).unwrap()
    }

    #[test]
    fn test_sync_replaces_existing_group_in_place() {
        let mut config = SiteConfig::parse(
            r"
site_name: Notes
nav:
  - Home: index.md
  - Docker:
      - Old: Docker/old.md
  - Linux: linux.md
",
        )
        .unwrap();

        let change = config.sync_group("Docker", &docker_entries()).unwrap();

        assert_eq!(change, NavChange::Updated);
        assert_eq!(
            config.root,
            yaml(
                r"
site_name: Notes
nav:
  - Home: index.md
  - Docker:
      - Обзор: Docker/overview/index.md
      - Команды: Docker/commands/index.md
  - Linux: linux.md
"
            )
        );
    }

    #[test]
    fn test_sync_appends_missing_group() {
        let mut config = SiteConfig::parse("nav:\n  - Home: index.md\n").unwrap();

        let change = config.sync_group("Docker", &docker_entries()).unwrap();

        assert_eq!(change, NavChange::Created);
        assert_eq!(
            config.root,
            yaml(
                r"
nav:
  - Home: index.md
  - Docker:
      - Обзор: Docker/overview/index.md
      - Команды: Docker/commands/index.md
"
            )
        );
    }

    #[test]
    fn test_sync_creates_missing_nav() {
        let mut config = SiteConfig::parse("site_name: Notes\n").unwrap();

        let change = config.sync_group("Docker", &docker_entries()).unwrap();

        assert_eq!(change, NavChange::Created);
        assert_eq!(config.group_entries("Docker"), Some(docker_entries()));
    }

    #[test]
    fn test_sync_empty_document() {
        let mut config = SiteConfig::parse("").unwrap();

        config.sync_group("Docker", &docker_entries()).unwrap();

        assert_eq!(config.group_entries("Docker"), Some(docker_entries()));
    }

    #[test]
    fn test_sync_twice_is_unchanged() {
        let mut config = SiteConfig::parse("nav: []\n").unwrap();

        config.sync_group("Docker", &docker_entries()).unwrap();
        let change = config.sync_group("Docker", &docker_entries()).unwrap();

        assert_eq!(change, NavChange::Unchanged);
        assert!(!change.is_changed());
    }

    #[test]
    fn test_sync_null_group_value() {
        let mut config = SiteConfig::parse("nav:\n  - Docker:\n").unwrap();

        let change = config.sync_group("Docker", &docker_entries()).unwrap();

        assert_eq!(change, NavChange::Updated);
        assert_eq!(config.group_entries("Docker"), Some(docker_entries()));
    }

    #[test]
    fn test_sync_preserves_top_level_key_order() {
        let mut config = SiteConfig::parse(
            r"
site_name: Notes
nav:
  - Home: index.md
theme:
  name: material
markdown_extensions:
  - admonition
",
        )
        .unwrap();

        config.sync_group("Docker", &docker_entries()).unwrap();

        let keys: Vec<_> = config
            .root
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_owned())
            .collect();
        assert_eq!(keys, vec!["site_name", "nav", "theme", "markdown_extensions"]);
    }

    #[test]
    fn test_string_item_mentioning_group_is_not_managed() {
        let mut config = SiteConfig::parse("nav:\n  - Docker.md\n").unwrap();

        let change = config.sync_group("Docker", &docker_entries()).unwrap();

        assert_eq!(change, NavChange::Created);
        let nav = config.root.get("nav").unwrap().as_sequence().unwrap();
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0], Value::String("Docker.md".to_owned()));
    }

    #[test]
    fn test_group_with_page_value_errors() {
        let mut config = SiteConfig::parse("nav:\n  - Docker: docker.md\n").unwrap();

        let err = config.sync_group("Docker", &docker_entries()).unwrap_err();

        assert!(matches!(err, NavError::GroupNotASequence(ref g) if g == "Docker"));
    }

    #[test]
    fn test_nav_not_a_list_errors() {
        let mut config = SiteConfig::parse("nav:\n  Docker: docker.md\n").unwrap();

        let err = config.sync_group("Docker", &docker_entries()).unwrap_err();

        assert!(matches!(err, NavError::NavNotASequence));
    }

    #[test]
    fn test_root_not_a_mapping_errors() {
        let mut config = SiteConfig::parse("- a\n- b\n").unwrap();

        let err = config.sync_group("Docker", &docker_entries()).unwrap_err();

        assert!(matches!(err, NavError::NotAMapping));
    }

    #[test]
    fn test_invalid_yaml_errors() {
        let err = SiteConfig::parse("nav: [unclosed\n").unwrap_err();
        assert!(matches!(err, NavError::Yaml(_)));
    }

    #[test]
    fn test_custom_tags_survive_round_trip() {
        let original = r"
site_name: !ENV [SITE_NAME, Notes]
nav:
  - Home: index.md
";
        let mut config = SiteConfig::parse(original).unwrap();
        config.sync_group("Docker", &docker_entries()).unwrap();

        let reparsed = SiteConfig::parse(&config.to_yaml_string().unwrap()).unwrap();

        assert_eq!(reparsed.root.get("site_name"), yaml(original).get("site_name"));
        assert_eq!(reparsed.group_entries("Docker"), Some(docker_entries()));
    }

    #[test]
    fn test_python_name_tags_are_refused() {
        let original = r"
site_name: Notes
markdown_extensions:
  - pymdownx.emoji:
      emoji_index: !!python/name:material.extensions.emoji.twemoji
      emoji_generator: !!python/name:material.extensions.emoji.to_svg
  - pymdownx.superfences:
      custom_fences:
        - name: mermaid
          class: mermaid
          format: !!python/name:pymdownx.superfences.fence_code_format ''
nav:
  - Home: index.md
";
        let err = SiteConfig::parse(original).unwrap_err();

        assert!(
            matches!(err, NavError::UnsupportedTag(ref tag)
                if tag == "python/name:material.extensions.emoji.twemoji"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_sync_site_config_leaves_python_tags_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");
        let original = "markdown_extensions:\n  - pymdownx.emoji:\n      emoji_index: !!python/name:material.extensions.emoji.twemoji\nnav: []\n";
        fs::write(&path, original).unwrap();

        let err = sync_site_config(&path, "Docker", &docker_entries(), true).unwrap_err();

        assert!(matches!(err, NavError::UnsupportedTag(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_core_tags_are_accepted() {
        let mut config = SiteConfig::parse("copyright: !!str 2024\nnav: []\n").unwrap();
        config.sync_group("Docker", &docker_entries()).unwrap();

        assert!(config.to_yaml_string().unwrap().contains("2024"));
    }

    #[test]
    fn test_group_entries_missing_group() {
        let config = SiteConfig::parse("nav:\n  - Home: index.md\n").unwrap();
        assert_eq!(config.group_entries("Docker"), None);
    }

    #[test]
    fn test_sync_site_config_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");
        fs::write(&path, "site_name: Notes\nnav:\n  - Home: index.md\n").unwrap();

        let change = sync_site_config(&path, "Docker", &docker_entries(), true).unwrap();

        assert_eq!(change, NavChange::Created);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Обзор"), "non-ASCII titles must not be escaped: {written}");
        let reloaded = SiteConfig::load(&path).unwrap();
        assert_eq!(reloaded.group_entries("Docker"), Some(docker_entries()));
    }

    #[test]
    fn test_sync_site_config_dry_run_leaves_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");
        let original = "site_name: Notes\n";
        fs::write(&path, original).unwrap();

        let change = sync_site_config(&path, "Docker", &docker_entries(), false).unwrap();

        assert_eq!(change, NavChange::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_sync_site_config_unchanged_does_not_rewrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");
        // Hand formatting would be lost by a rewrite
        let original = "nav:\n    -   Docker:\n            - Обзор: Docker/overview/index.md\n            - Команды: Docker/commands/index.md\n";
        fs::write(&path, original).unwrap();

        let change = sync_site_config(&path, "Docker", &docker_entries(), true).unwrap();

        assert_eq!(change, NavChange::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_sync_site_config_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");

        let err = sync_site_config(&path, "Docker", &docker_entries(), true).unwrap_err();

        assert!(matches!(err, NavError::Io { .. }));
    }
}
