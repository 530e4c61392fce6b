//! README renderer
//!
//! Turns a [`ProjectMetadata`] into Markdown by appending a fixed sequence of
//! sections. A section is emitted only when its field is present; absent
//! fields leave no trace in the output. Text is inserted verbatim.

use std::fmt;

use crate::metadata::ProjectMetadata;

const BADGE_URL: &str = "https://img.shields.io/badge/license";

/// README sections in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Badges,
    Title,
    Description,
    TechStack,
    Features,
    Installation,
    Usage,
    Contributing,
    License,
    Author,
}

impl Section {
    /// All sections, in the order they appear in the README
    pub const ALL: [Section; 10] = [
        Section::Badges,
        Section::Title,
        Section::Description,
        Section::TechStack,
        Section::Features,
        Section::Installation,
        Section::Usage,
        Section::Contributing,
        Section::License,
        Section::Author,
    ];

    /// Level-2 heading text, `None` for badges and title
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Section::Badges | Section::Title => None,
            Section::Description => Some("📖 Description"),
            Section::TechStack => Some("🛠️ Tech Stack"),
            Section::Features => Some("✨ Features"),
            Section::Installation => Some("📦 Installation"),
            Section::Usage => Some("🚀 Usage"),
            Section::Contributing => Some("🤝 Contributing"),
            Section::License => Some("📄 License"),
            Section::Author => Some("👤 Author"),
        }
    }

    /// Whether this section is emitted for `meta`
    pub fn is_present(&self, meta: &ProjectMetadata) -> bool {
        match self {
            Section::Badges => meta.badges && meta.license.is_some(),
            Section::Title => !meta.title.is_empty(),
            Section::Description => !meta.description.is_empty(),
            Section::TechStack => !meta.tech_stack.is_empty(),
            Section::Features => !meta.features.is_empty(),
            Section::Installation => !meta.installation.is_empty(),
            Section::Usage => !meta.usage.is_empty(),
            Section::Contributing => !meta.contributing.is_empty(),
            Section::License => meta.license.is_some(),
            Section::Author => !meta.author.is_empty(),
        }
    }

    /// Render this section including its trailing separator
    pub fn render(&self, meta: &ProjectMetadata) -> Option<String> {
        if !self.is_present(meta) {
            return None;
        }

        let license = meta.license.map(|l| l.id()).unwrap_or_default();
        let rendered = match self {
            Section::Badges => format!("![License]({BADGE_URL}-{license}-blue.svg)\n\n"),
            Section::Title => format!("# {}\n\n", meta.title),
            Section::Description => self.block(&meta.description),
            Section::TechStack => self.block(&meta.tech_stack),
            Section::Features => self.block(&meta.features),
            Section::Installation => self.block(&fenced(&meta.installation)),
            Section::Usage => self.block(&fenced(&meta.usage)),
            Section::Contributing => self.block(&meta.contributing),
            Section::License => {
                self.block(&format!("This project is licensed under the {license} License."))
            }
            // Last section: single trailing newline
            Section::Author => {
                format!("## {}\n\n{}\n", self.heading().unwrap_or_default(), meta.author)
            }
        };
        Some(rendered)
    }

    fn block(&self, body: &str) -> String {
        format!("## {}\n\n{}\n\n", self.heading().unwrap_or_default(), body)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Badges => "Badges",
            Section::Title => "Title",
            Section::Description => "Description",
            Section::TechStack => "Tech Stack",
            Section::Features => "Features",
            Section::Installation => "Installation",
            Section::Usage => "Usage",
            Section::Contributing => "Contributing",
            Section::License => "License",
            Section::Author => "Author",
        };
        f.write_str(name)
    }
}

fn fenced(commands: &str) -> String {
    format!("```bash\n{commands}\n```")
}

/// Render `meta` into a README
pub fn render(meta: &ProjectMetadata) -> String {
    let mut output = String::new();
    for section in Section::ALL {
        if let Some(rendered) = section.render(meta) {
            output.push_str(&rendered);
        }
    }
    output
}

/// Sections that `render` would emit for `meta`, in order
pub fn sections_present(meta: &ProjectMetadata) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|s| s.is_present(meta))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::metadata::{License, Update};

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&ProjectMetadata::empty()), "");
    }

    #[test]
    fn test_badge_needs_license() {
        let meta = ProjectMetadata::empty().with(Update::Badges(true));
        assert!(!Section::Badges.is_present(&meta));

        let meta = meta.with(Update::License(Some(License::Isc)));
        assert_eq!(
            Section::Badges.render(&meta).unwrap(),
            "![License](https://img.shields.io/badge/license-ISC-blue.svg)\n\n"
        );
    }

    #[test]
    fn test_fenced_sections() {
        let meta = ProjectMetadata::empty().with(Update::Usage("cargo run".to_string()));
        assert_eq!(render(&meta), "## 🚀 Usage\n\n```bash\ncargo run\n```\n\n");
    }

    #[test]
    fn test_author_has_single_trailing_newline() {
        let meta = ProjectMetadata::empty().with(Update::Author("Ada".to_string()));
        assert_eq!(render(&meta), "## 👤 Author\n\nAda\n");
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let meta = ProjectMetadata::empty().with(Update::Title(" ".to_string()));
        assert_eq!(sections_present(&meta), vec![Section::Title]);
    }
}
