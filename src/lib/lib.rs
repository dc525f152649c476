//! The pbxfontprune library removes duplicate font resource entries from Xcode project files.
//!
//! React Native projects that use `react-native-vector-icons` often end up with the icon fonts
//! registered twice in `project.pbxproj`: once by autolinking and once by a manual
//! "Copy Bundle Resources" entry. Xcode then fails the build with "Multiple commands produce"
//! errors. This crate strips the manual entries so that only the autolinked copy remains.
//!
//! The edit is a plain text transformation. No pbxproj parser is involved: a fixed set of
//! regular expressions is applied to the raw file content and the result is written back.
//! Patterns that do not match are left alone, so running the tool on an already cleaned
//! project is a no-op.
//!
//! Basic usage, with the default font list and an atomic write:
//! ```rust,no_run
//! use std::error::Error;
//!
//! fn example() -> Result<(), Box<dyn Error>> {
//!     pbxfontprune::prune("ios/MyApp.xcodeproj/project.pbxproj")?;
//!     Ok(())
//! }
//! ```
//!
//! For more control, build a [`config::PruneConfig`] directly or load one from a TOML file
//! (`pbxfontprunerc.toml`):
//! ```toml
//! [project]
//! file = "ios/MyApp.xcodeproj/project.pbxproj"
//! atomic_write = true
//!
//! [fonts]
//! names = ["FontAwesome.ttf", "Ionicons.ttf"]
//! ```
//!
//! ## Processing Flow
//! ```text
//! +-------------+     +---------------------+     +----------------------+
//! |  Read file  |     |  Per font:          |     |  Resources phase:    |
//! |  into one   | --> |  - PBXBuildFile     | --> |  drop "<F> in        | --> write back
//! |  buffer     |     |  - PBXFileReference |     |  Resources" entries  |
//! +-------------+     +---------------------+     +----------------------+
//! ```

pub mod config;
pub mod fonts;
pub mod patterns;
pub mod persist;
pub mod pruner;

use log::info;
use std::error::Error;
use std::fmt;
use std::path::Path;

pub use config::PruneConfig;
pub use pruner::{FontPruner, PruneStats};

/// Message printed by the command line tool once the project file has been rewritten.
pub const SUCCESS_MESSAGE: &str = "✅ Removed duplicate font references from Xcode project file";

/// Errors raised while pruning a project file.
///
/// A pattern that simply does not match is never an error; only failures to access the file,
/// to load configuration or to compile a font pattern are reported.
#[derive(Debug)]
pub enum PruneError {
    /// The project file could not be read, written or replaced
    FileAccess {
        message: String,
        path: String,
        suggestion: String,
    },
    /// The configuration file is unreadable or malformed
    Config { message: String, suggestion: String },
    /// A font name produced a pattern the regex engine rejected. Names are escaped, so this
    /// only happens when a name is long enough to exceed the compiled regex size limit.
    Pattern { font_name: String, message: String },
}

impl Error for PruneError {}
impl fmt::Display for PruneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PruneError::FileAccess {
                message,
                path,
                suggestion,
            } => {
                write!(f, "❌ File Error: {}", message)?;
                write!(f, "\n📁 Path: {}", path)?;
                write!(f, "\n💡 Suggestion: {}", suggestion)?;
                Ok(())
            }
            PruneError::Config {
                message,
                suggestion,
            } => {
                write!(f, "❌ Configuration Error: {}", message)?;
                write!(f, "\n💡 Suggestion: {}", suggestion)?;
                Ok(())
            }
            PruneError::Pattern { font_name, message } => {
                write!(f, "❌ Pattern Error: font '{}'", font_name)?;
                write!(f, "\n   Reason: {}", message)?;
                Ok(())
            }
        }
    }
}

impl PruneError {
    /// Wraps an I/O failure on `path` with a suggestion matched to the error kind.
    pub fn file_access(action: &str, path: &Path, err: &std::io::Error) -> Self {
        let suggestion = match err.kind() {
            std::io::ErrorKind::NotFound => {
                "Run the tool from the React Native project root or pass --project".to_string()
            }
            std::io::ErrorKind::PermissionDenied => {
                "Check that you have read and write permissions for this file".to_string()
            }
            _ => "Check that the path points to a readable, writable text file".to_string(),
        };
        PruneError::FileAccess {
            message: format!("Failed to {}: {}", action, err),
            path: path.display().to_string(),
            suggestion,
        }
    }

    /// Creates a configuration error with the default suggestion
    pub fn config_error(message: impl Into<String>) -> Self {
        PruneError::Config {
            message: message.into(),
            suggestion: "Compare your file with the output of --get-default-configuration"
                .to_string(),
        }
    }
}

/// Removes the default set of vector-icon font entries from the project file at `file_path`.
///
/// The file is read in full, pruned in memory and replaced atomically. Missing entries are
/// not an error, so calling this on an already cleaned file leaves its content unchanged.
///
/// # Returns
/// * `Ok(())` once the file has been rewritten
/// * `Err(PruneError::FileAccess)` if the file cannot be read or written
pub fn prune(file_path: impl AsRef<Path>) -> Result<(), PruneError> {
    let config = PruneConfig {
        project_file: file_path.as_ref().to_path_buf(),
        ..PruneConfig::default()
    };
    prune_with_config(&config).map(|_| ())
}

/// Prunes the project file described by `config` and reports what was removed.
///
/// # Example
/// ```rust,no_run
/// use pbxfontprune::config::PruneConfig;
///
/// let config = PruneConfig {
///     project_file: "ios/MyApp.xcodeproj/project.pbxproj".into(),
///     font_names: vec!["FontAwesome.ttf".to_string()],
///     atomic_write: false,
/// };
/// let stats = pbxfontprune::prune_with_config(&config).unwrap();
/// println!("removed {} entries", stats.total());
/// ```
pub fn prune_with_config(config: &PruneConfig) -> Result<PruneStats, PruneError> {
    let pruner = FontPruner::new(&config.font_names)?;
    let content = persist::read_project_file(&config.project_file)?;
    let (pruned, stats) = pruner.prune_text(&content);
    persist::write_project_file(&config.project_file, &pruned, config.atomic_write)?;

    info!(
        "Pruned {}: {} build file(s), {} file reference(s), {} resources entr(ies)",
        config.project_file.display(),
        stats.build_files,
        stats.file_references,
        stats.resource_entries
    );
    Ok(stats)
}

/// Applies the pruning passes for `font_names` to an in-memory project file.
pub fn prune_content<I, S>(content: &str, font_names: I) -> Result<String, PruneError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pruner = FontPruner::new(font_names)?;
    Ok(pruner.prune_text(content).0)
}
