//! Project metadata
//!
//! The flat record collected by the form and consumed by the renderer.

pub mod field;
pub mod license;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use field::{Field, Update};
pub use license::License;

use crate::error::Result;

fn default_license() -> Option<License> {
    Some(License::Mit)
}

fn default_badges() -> bool {
    true
}

/// Everything the README is rendered from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub installation: String,

    #[serde(default)]
    pub usage: String,

    #[serde(default)]
    pub features: String,

    #[serde(default)]
    pub tech_stack: String,

    #[serde(default)]
    pub contributing: String,

    /// `None` renders neither the badge nor the License section
    #[serde(default = "default_license", with = "crate::metadata::license::optional")]
    pub license: Option<License>,

    #[serde(default)]
    pub author: String,

    /// Include the license badge line
    #[serde(default = "default_badges")]
    pub badges: bool,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            installation: String::new(),
            usage: String::new(),
            features: String::new(),
            tech_stack: String::new(),
            contributing: String::new(),
            license: default_license(),
            author: String::new(),
            badges: default_badges(),
        }
    }
}

impl ProjectMetadata {
    /// Metadata with every text field empty, no license, and badges off
    pub fn empty() -> Self {
        Self {
            license: None,
            badges: false,
            ..Self::default()
        }
    }

    /// Return a copy with exactly one field replaced
    #[must_use]
    pub fn with(mut self, update: Update) -> Self {
        self.apply(update);
        self
    }

    /// Replace exactly one field in place
    pub fn apply(&mut self, update: Update) {
        match update {
            Update::Title(v) => self.title = v,
            Update::Description(v) => self.description = v,
            Update::TechStack(v) => self.tech_stack = v,
            Update::Features(v) => self.features = v,
            Update::Installation(v) => self.installation = v,
            Update::Usage(v) => self.usage = v,
            Update::Contributing(v) => self.contributing = v,
            Update::License(v) => self.license = v,
            Update::Author(v) => self.author = v,
            Update::Badges(v) => self.badges = v,
        }
    }

    /// Current value of a text field, `None` for license and badges
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.title),
            Field::Description => Some(&self.description),
            Field::TechStack => Some(&self.tech_stack),
            Field::Features => Some(&self.features),
            Field::Installation => Some(&self.installation),
            Field::Usage => Some(&self.usage),
            Field::Contributing => Some(&self.contributing),
            Field::Author => Some(&self.author),
            Field::License | Field::Badges => None,
        }
    }

    /// Current value of any field, formatted for display
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::License => self.license.map(|l| l.id().to_string()).unwrap_or_default(),
            Field::Badges => self.badges.to_string(),
            other => self.text(other).unwrap_or_default().to_string(),
        }
    }

    /// Load metadata from a JSON or YAML file, chosen by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }

    /// Save metadata as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let meta = ProjectMetadata::default();
        assert_eq!(meta.license, Some(License::Mit));
        assert!(meta.badges);
        assert!(meta.title.is_empty());
    }

    #[test]
    fn test_with_replaces_only_named_field() {
        let before = ProjectMetadata::default();
        let after = before.clone().with(Update::Author("Ada".to_string()));
        assert_eq!(after.author, "Ada");
        assert_eq!(
            ProjectMetadata {
                author: String::new(),
                ..after
            },
            before
        );
    }

    #[test]
    fn test_deserialize_camel_case_and_defaults() {
        let meta: ProjectMetadata =
            serde_json::from_str(r#"{"title":"Foo","techStack":"- Rust"}"#).unwrap();
        assert_eq!(meta.title, "Foo");
        assert_eq!(meta.tech_stack, "- Rust");
        assert_eq!(meta.license, Some(License::Mit));
        assert!(meta.badges);
    }

    #[test]
    fn test_deserialize_empty_license() {
        let meta: ProjectMetadata = serde_json::from_str(r#"{"license":""}"#).unwrap();
        assert_eq!(meta.license, None);
        let meta: ProjectMetadata = serde_json::from_str(r#"{"license":null}"#).unwrap();
        assert_eq!(meta.license, None);
    }

    #[test]
    fn test_deserialize_unknown_license_fails() {
        let result: std::result::Result<ProjectMetadata, _> =
            serde_json::from_str(r#"{"license":"WTFPL"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.yml");
        std::fs::write(&path, "title: Foo\nlicense: Apache-2.0\nbadges: false\n").unwrap();

        let meta = ProjectMetadata::load(&path).unwrap();
        assert_eq!(meta.title, "Foo");
        assert_eq!(meta.license, Some(License::Apache2));
        assert!(!meta.badges);
    }

    #[test]
    fn test_save_then_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");
        let meta = ProjectMetadata::default()
            .with(Update::Title("Foo".to_string()))
            .with(Update::License(None));

        meta.save(&path).unwrap();
        assert_eq!(ProjectMetadata::load(&path).unwrap(), meta);
    }
}
