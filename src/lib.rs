#![forbid(unsafe_code)]

//! # readmegen
//!
//! Generate a project README from a short form of project metadata.
//!
//! ## Features
//!
//! - **Typed form state**: one update per field, no stringly-typed setters
//! - **Deterministic rendering**: fixed section order, verbatim text
//! - **Export**: copy to the system clipboard or save as `README.md`
//!
//! ## Example
//!
//! ```rust
//! use readmegen::{render, License, ProjectMetadata, Update};
//!
//! let meta = ProjectMetadata::default()
//!     .with(Update::Title("Foo".to_string()))
//!     .with(Update::License(Some(License::Mit)))
//!     .with(Update::Badges(false));
//!
//! let readme = render(&meta);
//! assert!(readme.starts_with("# Foo\n\n"));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod metadata;
pub mod render;

// Re-exports
pub use config::Config;
pub use error::{ReadmeError, Result};
pub use export::{ClipboardSink, MemoryClipboard, SystemClipboard, README_FILE_NAME};
pub use form::FormState;
pub use metadata::{Field, License, ProjectMetadata, Update};
pub use render::{render, sections_present, Section};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
