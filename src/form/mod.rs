//! Form state
//!
//! Holds the metadata being edited and the last generated README. Rendering is
//! explicit: edits after a [`FormState::generate`] do not touch the stored
//! README until the next generate.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::export::{self, ClipboardSink, README_FILE_NAME};
use crate::metadata::{ProjectMetadata, Update};
use crate::render::render;

/// Current form values plus the generated README, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    metadata: ProjectMetadata,
    readme: Option<String>,
}

impl FormState {
    /// Start a form from seeded metadata
    pub fn new(metadata: ProjectMetadata) -> Self {
        Self {
            metadata,
            readme: None,
        }
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    /// Replace exactly one field
    pub fn update(&mut self, update: Update) {
        tracing::debug!("Updating field {}", update.field());
        self.metadata.apply(update);
    }

    /// Render the current metadata and keep the result
    pub fn generate(&mut self) -> &str {
        let readme = render(&self.metadata);
        tracing::debug!("Generated README ({} bytes)", readme.len());
        self.readme.insert(readme).as_str()
    }

    /// Last generated README
    pub fn readme(&self) -> Option<&str> {
        self.readme.as_deref()
    }

    /// Whether Copy and Download are available
    pub fn has_readme(&self) -> bool {
        self.readme.is_some()
    }

    /// Copy the generated README. Returns `false` without touching the
    /// clipboard if nothing has been generated yet.
    pub fn copy(&self, sink: &mut dyn ClipboardSink) -> Result<bool> {
        match self.readme() {
            Some(readme) => {
                export::copy_to(sink, readme)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Save the generated README as `README.md` inside `dir`.
    ///
    /// Returns `None` if nothing has been generated yet.
    pub fn download(&self, dir: &Path, overwrite: bool) -> Result<Option<PathBuf>> {
        match self.readme() {
            Some(readme) => {
                let path = dir.join(README_FILE_NAME);
                export::write_readme(&path, readme, overwrite).map(Some)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MemoryClipboard;

    #[test]
    fn test_actions_are_noops_before_generate() {
        let dir = tempfile::tempdir().unwrap();
        let form = FormState::default();
        let mut sink = MemoryClipboard::default();

        assert!(!form.has_readme());
        assert!(!form.copy(&mut sink).unwrap());
        assert_eq!(sink.writes, 0);
        assert_eq!(form.download(dir.path(), false).unwrap(), None);
        assert!(!dir.path().join(README_FILE_NAME).exists());
    }

    #[test]
    fn test_generate_is_explicit() {
        let mut form = FormState::new(ProjectMetadata::empty());
        form.update(Update::Title("Foo".to_string()));
        assert_eq!(form.readme(), None);

        assert_eq!(form.generate(), "# Foo\n\n");

        form.update(Update::Title("Bar".to_string()));
        assert_eq!(form.readme(), Some("# Foo\n\n"));
        assert_eq!(form.metadata().title, "Bar");

        form.generate();
        assert_eq!(form.readme(), Some("# Bar\n\n"));
    }

    #[test]
    fn test_copy_and_download_after_generate() {
        let dir = tempfile::tempdir().unwrap();
        let mut form = FormState::new(ProjectMetadata::empty());
        form.update(Update::Author("Ada".to_string()));
        form.generate();

        let mut sink = MemoryClipboard::default();
        assert!(form.copy(&mut sink).unwrap());
        assert_eq!(sink.contents.as_deref(), form.readme());

        let path = form.download(dir.path(), false).unwrap().unwrap();
        assert_eq!(path, dir.path().join("README.md"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "## 👤 Author\n\nAda\n");
    }
}
