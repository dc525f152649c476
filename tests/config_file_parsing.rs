//! Tests for loading pruner settings from TOML files.
//!
//! This module validates that configuration files on disk are read, that missing keys keep
//! their defaults and that the generated default configuration is a valid input.

#[cfg(test)]
mod config_file_tests {
    use pbxfontprune::config::{
        default_config_toml, load_config_from_source, ConfigSource, PruneConfig,
    };
    use pbxfontprune::fonts::DEFAULT_FONT_NAMES;
    use pbxfontprune::PruneError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_load_full_config_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pbxfontprunerc.toml");
        fs::write(
            &path,
            r#"
[project]
file = "ios/Demo.xcodeproj/project.pbxproj"
atomic_write = false

[fonts]
names = ["Ionicons.ttf", "MaterialIcons.ttf"]
"#,
        )
        .unwrap();

        let config = load_config_from_source(ConfigSource::File(path.to_str().unwrap()))
            .expect("Failed to load config");

        assert_eq!(
            config,
            PruneConfig {
                project_file: PathBuf::from("ios/Demo.xcodeproj/project.pbxproj"),
                font_names: vec!["Ionicons.ttf".to_string(), "MaterialIcons.ttf".to_string()],
                atomic_write: false,
            }
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        const EMBEDDED: &str = r#"
[project]
file = "App.pbxproj"
"#;
        let config = load_config_from_source(ConfigSource::Embedded(EMBEDDED)).unwrap();

        assert_eq!(config.project_file, PathBuf::from("App.pbxproj"));
        assert!(config.atomic_write, "atomic_write should default to true");
        assert_eq!(config.font_names.len(), DEFAULT_FONT_NAMES.len());
    }

    #[test]
    fn test_default_configuration_output_is_loadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generated.toml");
        fs::write(&path, default_config_toml()).unwrap();

        let config = load_config_from_source(ConfigSource::File(path.to_str().unwrap())).unwrap();

        assert_eq!(config, PruneConfig::default());
    }

    #[test]
    fn test_empty_names_disables_pruning() {
        let config =
            load_config_from_source(ConfigSource::Embedded("[fonts]\nnames = []\n")).unwrap();
        assert!(config.font_names.is_empty());
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let config = load_config_from_source(ConfigSource::Embedded(
            "[styling]\ncolor = \"red\"\n",
        ))
        .unwrap();
        assert_eq!(config, PruneConfig::default());
    }

    #[test]
    fn test_config_error_message_has_suggestion() {
        let err = load_config_from_source(ConfigSource::Embedded("[fonts]\nextra = 5\n"))
            .unwrap_err();
        match &err {
            PruneError::Config { message, .. } => assert!(message.contains("fonts.extra")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(err.to_string().contains("Suggestion"));
    }
}
