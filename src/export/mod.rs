//! Export actions
//!
//! Copy the generated README to a clipboard, or save it as `README.md`.

pub mod clipboard;

use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::error::{ReadmeError, Result};

pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};

/// File name used by the download action
pub const README_FILE_NAME: &str = "README.md";

/// Content type of the saved file
pub const README_MIME_TYPE: &str = "text/markdown";

/// Put `readme` on the clipboard
pub fn copy_to(sink: &mut dyn ClipboardSink, readme: &str) -> Result<()> {
    sink.write_text(readme)?;
    tracing::debug!("Copied {} bytes to clipboard", readme.len());
    Ok(())
}

/// Put `readme` on the clipboard so it is still there after the process exits.
///
/// Returns `true` if the sink had to be held, which blocks until another
/// application replaces the clipboard contents.
pub fn copy_and_hold(sink: &mut dyn ClipboardSink, readme: &str) -> Result<bool> {
    if sink.outlives_process() {
        copy_to(sink, readme)?;
        return Ok(false);
    }

    tracing::debug!("Holding clipboard until its contents are replaced");
    sink.write_text_and_hold(readme)?;
    Ok(true)
}

/// Write `readme` to `path`. An existing file is only replaced when `overwrite` is set.
pub fn write_readme(path: &Path, readme: &str, overwrite: bool) -> Result<PathBuf> {
    if path.exists() && !overwrite {
        return Err(ReadmeError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, readme)?;
    tracing::debug!("Wrote {} ({})", path.display(), README_MIME_TYPE);
    Ok(path.to_path_buf())
}

/// Unified diff between the file at `path` and `new`.
///
/// Returns `None` if the file does not exist, can't be read, or is identical.
pub fn diff_against_existing(path: &Path, new: &str) -> Option<String> {
    let old = std::fs::read_to_string(path).ok()?;
    if old == new {
        return None;
    }

    let name = path.display().to_string();
    let diff = TextDiff::from_lines(old.as_str(), new)
        .unified_diff()
        .context_radius(2)
        .header(&format!("{name} (existing)"), &format!("{name} (generated)"))
        .to_string();
    Some(diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_readme_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(README_FILE_NAME);
        std::fs::write(&path, "old").unwrap();

        let err = write_readme(&path, "new", false).unwrap_err();
        assert!(matches!(err, ReadmeError::AlreadyExists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");

        write_readme(&path, "new", true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_readme_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join(README_FILE_NAME);
        write_readme(&path, "# Foo\n\n", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_diff_against_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(README_FILE_NAME);
        assert!(diff_against_existing(&path, "# Foo\n").is_none());

        std::fs::write(&path, "# Foo\n").unwrap();
        assert!(diff_against_existing(&path, "# Foo\n").is_none());

        let diff = diff_against_existing(&path, "# Bar\n").unwrap();
        assert!(diff.contains("-# Foo"));
        assert!(diff.contains("+# Bar"));
    }

    #[test]
    fn test_copy_and_hold_only_blocks_transient_clipboards() {
        let mut lasting = MemoryClipboard::default();
        assert!(!copy_and_hold(&mut lasting, "# Foo\n\n").unwrap());
        assert_eq!(lasting.holds, 0);
        assert_eq!(lasting.contents.as_deref(), Some("# Foo\n\n"));

        let mut transient = MemoryClipboard::transient();
        assert!(copy_and_hold(&mut transient, "# Foo\n\n").unwrap());
        assert_eq!(transient.holds, 1);
        assert_eq!(transient.contents.as_deref(), Some("# Foo\n\n"));
    }

    #[test]
    fn test_copy_to_memory() {
        let mut sink = MemoryClipboard::default();
        copy_to(&mut sink, "# Foo\n\n").unwrap();
        assert_eq!(sink.contents.as_deref(), Some("# Foo\n\n"));
        assert_eq!(sink.writes, 1);
    }
}
