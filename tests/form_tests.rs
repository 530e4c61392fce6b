//! Form state and export integration tests


use readmegen::commands::{resolve_metadata, RenderOptions};
use readmegen::{
    Config, Field, FormState, License, MemoryClipboard, ProjectMetadata, ReadmeError, Update,
};

// =============================================================================
// Field updates
// =============================================================================

mod update_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_replaces_exactly_one_field() {
        let base = ProjectMetadata::default()
            .with(Update::Title("Foo".to_string()))
            .with(Update::Author("Ada".to_string()));

        for field in Field::ALL {
            let raw = match field {
                Field::License => "ISC",
                Field::Badges => "false",
                _ => "changed",
            };
            let updated = base.clone().with(Update::parse(field, raw).unwrap());

            for other in Field::ALL {
                if other == field {
                    assert_ne!(updated.display_value(other), base.display_value(other));
                } else {
                    assert_eq!(updated.display_value(other), base.display_value(other));
                }
            }
        }
    }

    #[test]
    fn test_set_assignments_from_cli() {
        let updates = ["tech-stack=- Rust\\n- Serde", "license=BSD-3-Clause", "badges=no"]
            .iter()
            .map(|a| Update::parse_assignment(a))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let meta = updates
            .into_iter()
            .fold(ProjectMetadata::default(), |meta, u| meta.with(u));
        assert_eq!(meta.tech_stack, "- Rust\n- Serde");
        assert_eq!(meta.license, Some(License::Bsd3Clause));
        assert!(!meta.badges);
    }

    #[test]
    fn test_unknown_license_rejected() {
        let err = Update::parse_assignment("license=Unlicense").unwrap_err();
        assert!(matches!(err, ReadmeError::UnknownLicense(_)));
    }
}

// =============================================================================
// Generate, copy, download
// =============================================================================

mod session_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut form = FormState::new(Config::default().seed_metadata());
        form.update(Update::Title("Foo".to_string()));
        form.update(Update::Description("A tool".to_string()));

        let mut clipboard = MemoryClipboard::default();
        assert!(!form.copy(&mut clipboard).unwrap());

        let readme = form.generate().to_string();
        assert!(readme.starts_with("![License]"));

        assert!(form.copy(&mut clipboard).unwrap());
        assert_eq!(clipboard.contents.as_deref(), Some(readme.as_str()));

        let path = form.download(dir.path(), false).unwrap().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), readme);

        // Second download without overwrite fails and leaves the file alone
        form.update(Update::Title("Bar".to_string()));
        form.generate();
        let err = form.download(dir.path(), false).unwrap_err();
        assert!(matches!(err, ReadmeError::AlreadyExists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), readme);

        form.download(dir.path(), true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("# Bar"));
    }

    #[test]
    fn test_failed_copy_keeps_state() {
        struct Broken;
        impl readmegen::ClipboardSink for Broken {
            fn write_text(&mut self, _text: &str) -> readmegen::Result<()> {
                Err(ReadmeError::Clipboard("no display".to_string()))
            }
        }

        let mut form = FormState::new(ProjectMetadata::empty());
        form.update(Update::Title("Foo".to_string()));
        form.generate();
        let before = form.clone();

        assert!(form.copy(&mut Broken).is_err());
        assert_eq!(form, before);
    }
}

// =============================================================================
// Render command metadata resolution
// =============================================================================

mod resolve_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_yaml_metadata_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.yaml");
        std::fs::write(
            &path,
            "title: Foo\ninstallation: |\n  cargo build\n  cargo test\nlicense: ''\n",
        )
        .unwrap();

        let options = RenderOptions {
            from: Some(path),
            ..Default::default()
        };
        let meta = resolve_metadata(&options, &Config::default()).unwrap();
        assert_eq!(meta.title, "Foo");
        assert_eq!(meta.installation, "cargo build\ncargo test\n");
        assert_eq!(meta.license, None);
    }
}
