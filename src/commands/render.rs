//! Render Command
//!
//! Implements `readmegen render`: build the metadata from config defaults, an
//! optional metadata file and command-line values, then print or save the
//! README without prompting.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use super::output::{copy_before_exit, report_failure};
use crate::config::Config;
use crate::export::{self, SystemClipboard, README_MIME_TYPE};
use crate::metadata::{ProjectMetadata, Update};
use crate::render::render;

/// Options for the render command
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// JSON or YAML metadata file to start from
    pub from: Option<PathBuf>,
    /// Field updates applied in order after loading
    pub updates: Vec<Update>,
    /// Write the README here instead of stdout
    pub output: Option<PathBuf>,
    /// Write to the configured output path
    pub save: bool,
    /// Replace an existing file
    pub force: bool,
    /// Also copy the README to the clipboard
    pub copy: bool,
}

/// Build the metadata a render run works on
pub fn resolve_metadata(options: &RenderOptions, config: &Config) -> Result<ProjectMetadata> {
    let mut meta = match &options.from {
        Some(path) => {
            tracing::debug!("Loading metadata from {}", path.display());
            ProjectMetadata::load(path)?
        }
        None => config.seed_metadata(),
    };

    for update in options.updates.iter().cloned() {
        meta.apply(update);
    }

    Ok(meta)
}

/// Execute the render command
pub fn execute_render(options: RenderOptions, config: &Config) -> Result<()> {
    let meta = resolve_metadata(&options, config)?;
    let readme = render(&meta);

    let target = options
        .output
        .clone()
        .or_else(|| options.save.then(|| config.output.clone()));

    match target {
        Some(path) => {
            let written = export::write_readme(&path, &readme, options.force)?;
            eprintln!(
                "{} Saved {} ({})",
                style("✓").green(),
                written.display(),
                README_MIME_TYPE
            );
        }
        None => print!("{}", readme),
    }

    if options.copy {
        match SystemClipboard::new() {
            Ok(mut clipboard) => copy_before_exit(&mut clipboard, &readme),
            Err(e) => report_failure("Copy", &e),
        }
    }

    Ok(())
}
