//! Field names and typed single-field updates

use std::fmt;
use std::str::FromStr;

use crate::error::{ReadmeError, Result};

use super::license::{self, License};

/// A named field of [`ProjectMetadata`](super::ProjectMetadata)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    TechStack,
    Features,
    Installation,
    Usage,
    Contributing,
    License,
    Author,
    Badges,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 10] = [
        Field::Title,
        Field::Description,
        Field::TechStack,
        Field::Features,
        Field::Installation,
        Field::Usage,
        Field::Contributing,
        Field::License,
        Field::Author,
        Field::Badges,
    ];

    /// Key used in metadata files
    pub fn key(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::TechStack => "techStack",
            Field::Features => "features",
            Field::Installation => "installation",
            Field::Usage => "usage",
            Field::Contributing => "contributing",
            Field::License => "license",
            Field::Author => "author",
            Field::Badges => "badges",
        }
    }

    /// Prompt label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Project Title",
            Field::Description => "Description",
            Field::TechStack => "Tech Stack",
            Field::Features => "Features",
            Field::Installation => "Installation",
            Field::Usage => "Usage",
            Field::Contributing => "Contributing",
            Field::License => "License",
            Field::Author => "Author",
            Field::Badges => "Include badges",
        }
    }

    /// Example text shown next to the prompt
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Title => "My Awesome Project",
            Field::Description => "A brief description of your project...",
            Field::TechStack => "- Rust\n- Tokio\n- SQLite",
            Field::Features => "- Feature 1\n- Feature 2\n- Feature 3",
            Field::Installation => "cargo install --path .",
            Field::Usage => "cargo run -- --help",
            Field::Contributing => {
                "Contributions are welcome! Please open an issue or submit a pull request."
            }
            Field::License | Field::Badges => "",
            Field::Author => "Your Name",
        }
    }

    /// Whether the field is entered as free text over several lines
    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            Field::Description
                | Field::TechStack
                | Field::Features
                | Field::Installation
                | Field::Usage
                | Field::Contributing
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ReadmeError;

    /// Accepts camelCase, kebab-case and snake_case names
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Field::ALL
            .iter()
            .copied()
            .find(|f| f.key().to_lowercase() == normalized)
            .ok_or_else(|| ReadmeError::UnknownField(s.to_string()))
    }
}

/// Replacement value for exactly one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Title(String),
    Description(String),
    TechStack(String),
    Features(String),
    Installation(String),
    Usage(String),
    Contributing(String),
    License(Option<License>),
    Author(String),
    Badges(bool),
}

impl Update {
    /// Parse raw user input for `field`
    pub fn parse(field: Field, raw: &str) -> Result<Self> {
        let value = raw.to_string();
        Ok(match field {
            Field::Title => Update::Title(value),
            Field::Description => Update::Description(value),
            Field::TechStack => Update::TechStack(value),
            Field::Features => Update::Features(value),
            Field::Installation => Update::Installation(value),
            Field::Usage => Update::Usage(value),
            Field::Contributing => Update::Contributing(value),
            Field::Author => Update::Author(value),
            Field::License => Update::License(license::parse_optional(raw)?),
            Field::Badges => Update::Badges(parse_flag(field, raw)?),
        })
    }

    /// Parse a `FIELD=VALUE` assignment.
    ///
    /// `\n` in the value becomes a newline and `\\n` a literal `\n`. Every other
    /// character, backslashes included, is kept as typed.
    pub fn parse_assignment(assignment: &str) -> Result<Self> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| ReadmeError::InvalidAssignment(assignment.to_string()))?;
        let field: Field = name.parse()?;
        Self::parse(field, &unescape_newlines(value))
    }

    /// The field this update targets
    pub fn field(&self) -> Field {
        match self {
            Update::Title(_) => Field::Title,
            Update::Description(_) => Field::Description,
            Update::TechStack(_) => Field::TechStack,
            Update::Features(_) => Field::Features,
            Update::Installation(_) => Field::Installation,
            Update::Usage(_) => Field::Usage,
            Update::Contributing(_) => Field::Contributing,
            Update::License(_) => Field::License,
            Update::Author(_) => Field::Author,
            Update::Badges(_) => Field::Badges,
        }
    }
}

fn unescape_newlines(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(idx) = rest.find('\\') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        if let Some(after) = tail.strip_prefix("\\\\n") {
            out.push_str("\\n");
            rest = after;
        } else if let Some(after) = tail.strip_prefix("\\n") {
            out.push('\n');
            rest = after;
        } else {
            out.push('\\');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

fn parse_flag(field: Field, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" => Ok(false),
        _ => Err(ReadmeError::InvalidFlag {
            field: field.key().to_string(),
            value: raw.to_string(),
        }),
    }
}
