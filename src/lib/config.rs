//! Configuration for the pruner.
//!
//! Configuration is read from TOML. Every key is optional; anything left out keeps its default.
//!
//! ```toml
//! [project]
//! file = "ios/IffaHealth.xcodeproj/project.pbxproj"
//! atomic_write = true
//!
//! [fonts]
//! names = ["FontAwesome.ttf", "Ionicons.ttf"]
//! extra = ["MyIcons.ttf"]
//! ```
//!
//! `fonts.names` replaces the built-in vector-icon list, `fonts.extra` is appended to whichever
//! list is in effect. The command line looks for `pbxfontprunerc.toml` in the current directory
//! when no `--config` is given.

use crate::fonts::{default_font_names, normalize_font_names};
use crate::PruneError;
use std::fs;
use std::path::PathBuf;
use toml::Value;

/// Project file edited when no path is configured.
pub const DEFAULT_PROJECT_FILE: &str = "ios/IffaHealth.xcodeproj/project.pbxproj";

/// File name picked up from the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pbxfontprunerc.toml";

/// Configuration source for the pruner settings.
#[derive(Debug, Clone)]
pub enum ConfigSource<'a> {
    /// Built-in defaults
    Default,
    /// Load configuration from a file path
    File(&'a str),
    /// TOML content held in memory
    Embedded(&'a str),
}

/// Everything a pruning run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PruneConfig {
    pub project_file: PathBuf,
    pub font_names: Vec<String>,
    /// Stage the new content in a temporary file and rename it over the original.
    pub atomic_write: bool,
}

impl Default for PruneConfig {
    fn default() -> Self {
        PruneConfig {
            project_file: PathBuf::from(DEFAULT_PROJECT_FILE),
            font_names: default_font_names(),
            atomic_write: true,
        }
    }
}

/// Reads an array of strings at `key`, rejecting any other shape.
fn parse_string_list(table: &Value, section: &str, key: &str) -> Result<Option<Vec<String>>, PruneError> {
    let Some(value) = table.get(key) else {
        return Ok(None);
    };
    let items = value.as_array().ok_or_else(|| {
        PruneError::config_error(format!("`{}.{}` must be an array of strings", section, key))
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                PruneError::config_error(format!(
                    "`{}.{}` must only contain strings, found {}",
                    section,
                    key,
                    item.type_str()
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Parses configuration from a TOML string.
///
/// Missing sections and keys fall back to [`PruneConfig::default`].
///
/// # Example
/// ```rust
/// use pbxfontprune::config::parse_config_string;
///
/// let config = parse_config_string(r#"
///     [project]
///     file = "ios/Demo.xcodeproj/project.pbxproj"
///
///     [fonts]
///     names = ["Feather.ttf"]
/// "#).unwrap();
/// assert_eq!(config.font_names, vec!["Feather.ttf".to_string()]);
/// assert!(config.atomic_write);
/// ```
pub fn parse_config_string(config_str: &str) -> Result<PruneConfig, PruneError> {
    let config: toml::Table = toml::from_str(config_str)
        .map_err(|e| PruneError::config_error(format!("Invalid TOML: {}", e)))?;

    let mut result = PruneConfig::default();

    if let Some(project) = config.get("project") {
        if let Some(file) = project.get("file") {
            let file = file
                .as_str()
                .ok_or_else(|| PruneError::config_error("`project.file` must be a string"))?;
            result.project_file = PathBuf::from(file);
        }
        if let Some(atomic) = project.get("atomic_write") {
            result.atomic_write = atomic
                .as_bool()
                .ok_or_else(|| PruneError::config_error("`project.atomic_write` must be a boolean"))?;
        }
    }

    if let Some(fonts) = config.get("fonts") {
        if let Some(names) = parse_string_list(fonts, "fonts", "names")? {
            result.font_names = names;
        }
        if let Some(extra) = parse_string_list(fonts, "fonts", "extra")? {
            result.font_names.extend(extra);
        }
    }

    result.font_names = normalize_font_names(&result.font_names);
    Ok(result)
}

/// Loads configuration from the given source.
///
/// # Example
/// ```rust
/// use pbxfontprune::config::{load_config_from_source, ConfigSource};
///
/// let config = load_config_from_source(ConfigSource::Default).unwrap();
/// assert!(config.font_names.contains(&"Ionicons.ttf".to_string()));
///
/// const EMBEDDED: &str = r#"
///     [project]
///     atomic_write = false
/// "#;
/// let config = load_config_from_source(ConfigSource::Embedded(EMBEDDED)).unwrap();
/// assert!(!config.atomic_write);
/// ```
pub fn load_config_from_source(source: ConfigSource) -> Result<PruneConfig, PruneError> {
    match source {
        ConfigSource::Default => Ok(PruneConfig::default()),
        ConfigSource::File(path) => {
            let config_str = fs::read_to_string(path).map_err(|e| PruneError::Config {
                message: format!("Failed to read configuration file '{}': {}", path, e),
                suggestion: "Check the --config path or remove the option to use defaults"
                    .to_string(),
            })?;
            parse_config_string(&config_str)
        }
        ConfigSource::Embedded(content) => parse_config_string(content),
    }
}

/// Renders the default configuration as TOML.
pub fn default_config_toml() -> String {
    let defaults = PruneConfig::default();
    let names = defaults
        .font_names
        .iter()
        .map(|n| format!("    \"{}\",", n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# pbxfontprune configuration\n\
         \n\
         [project]\n\
         # Path to the Xcode project file, relative to the working directory\n\
         file = \"{}\"\n\
         # Write to a temporary file and rename it over the original\n\
         atomic_write = {}\n\
         \n\
         [fonts]\n\
         # Fonts whose duplicate resource entries are removed\n\
         names = [\n{}\n]\n\
         # Additional fonts appended to `names`\n\
         extra = []\n",
        defaults.project_file.display(),
        defaults.atomic_write,
        names
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let parsed = parse_config_string(&default_config_toml()).unwrap();
        assert_eq!(parsed, PruneConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config_string("").unwrap(), PruneConfig::default());
    }

    #[test]
    fn test_names_replace_and_extra_appends() {
        let config = parse_config_string(
            r#"
            [fonts]
            names = ["Feather.ttf", "Octicons.ttf"]
            extra = ["Brand.otf", "Feather.ttf"]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.font_names,
            vec!["Feather.ttf", "Octicons.ttf", "Brand.otf"]
        );
    }

    #[test]
    fn test_extra_alone_extends_defaults() {
        let config = parse_config_string(
            r#"
            [fonts]
            extra = ["Brand.otf"]
            "#,
        )
        .unwrap();
        assert_eq!(config.font_names.len(), default_font_names().len() + 1);
        assert_eq!(config.font_names.last().unwrap(), "Brand.otf");
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(matches!(
            parse_config_string("[project]\nfile = 3\n"),
            Err(PruneError::Config { .. })
        ));
        assert!(matches!(
            parse_config_string("[project]\natomic_write = \"yes\"\n"),
            Err(PruneError::Config { .. })
        ));
        assert!(matches!(
            parse_config_string("[fonts]\nnames = \"Feather.ttf\"\n"),
            Err(PruneError::Config { .. })
        ));
        assert!(matches!(
            parse_config_string("[fonts]\nnames = [1, 2]\n"),
            Err(PruneError::Config { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = parse_config_string("[project\nfile = ").unwrap_err();
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config_from_source(ConfigSource::File("/nonexistent/pbxfontprunerc.toml"))
            .unwrap_err();
        assert!(matches!(err, PruneError::Config { .. }));
    }
}
