//! Regular expressions matching font entries in a `project.pbxproj` file.
//!
//! Every pattern allows any run of whitespace, newlines included, between tokens so that
//! reformatted entries still match. Font names are escaped and matched case-sensitively.
//! Object identifiers are the uppercase hexadecimal tokens Xcode generates.
//!
//! Three entry kinds are recognised for a font `F`:
//!
//! ```text
//! 0E4DB720B6354663968A8DD5 /* F in Resources */ = {isa = PBXBuildFile; fileRef = 89579A84B4224EB8A09DB26D /* F */; };
//! 89579A84B4224EB8A09DB26D /* F */ = {isa = PBXFileReference; explicitFileType = undefined; ... sourceTree = "<group>"; };
//! 0E4DB720B6354663968A8DD5 /* F in Resources */,
//! ```
//!
//! The last form only appears inside `files = ( ... )` lists and is matched only within the
//! resources build phase section, see [`RESOURCES_SECTION_RE`].

use crate::fonts::vector_icons_path;
use crate::PruneError;
use lazy_static::lazy_static;
use regex::Regex;

/// Uppercase hexadecimal object identifier.
const OBJECT_ID: &str = "[A-F0-9]+";

lazy_static! {
    /// Spans from the resources build phase begin marker to the first end marker after it.
    pub static ref RESOURCES_SECTION_RE: Regex = Regex::new(
        r"(?s)/\* Begin PBXResourcesBuildPhase section \*/.*?/\* End PBXResourcesBuildPhase section \*/"
    )
    .expect("resources section pattern is a valid regex");
}

/// Pattern source for a `PBXBuildFile` entry of `font_name`, leading whitespace included.
pub fn build_file_pattern(font_name: &str) -> String {
    let font = regex::escape(font_name);
    format!(
        r"\s*{id}\s*/\*\s*{font}\s*in\s*Resources\s*\*/\s*=\s*\{{\s*isa\s*=\s*PBXBuildFile;\s*fileRef\s*=\s*{id}\s*/\*\s*{font}\s*\*/\s*;\s*\}};",
        id = OBJECT_ID,
        font = font,
    )
}

/// Pattern source for the `PBXFileReference` entry pointing at the vector-icons copy of `font_name`.
pub fn file_reference_pattern(font_name: &str) -> String {
    let font = regex::escape(font_name);
    let path = regex::escape(&vector_icons_path(font_name));
    format!(
        concat!(
            r"\s*{id}\s*/\*\s*{font}\s*\*/\s*=\s*\{{\s*isa\s*=\s*PBXFileReference;",
            r"\s*explicitFileType\s*=\s*undefined;",
            r"\s*fileEncoding\s*=\s*undefined;",
            r"\s*includeInIndex\s*=\s*0;",
            r"\s*lastKnownFileType\s*=\s*unknown;",
            r"\s*name\s*=\s*{font};",
            r#"\s*path\s*=\s*"{path}";"#,
            r#"\s*sourceTree\s*=\s*"<group>";\s*\}};"#,
        ),
        id = OBJECT_ID,
        font = font,
        path = path,
    )
}

/// Pattern source for a `<id> /* F in Resources */,` list member.
pub fn resources_entry_pattern(font_name: &str) -> String {
    let font = regex::escape(font_name);
    format!(
        r"\s*{id}\s*/\*\s*{font}\s*in\s*Resources\s*\*/\s*,",
        id = OBJECT_ID,
        font = font,
    )
}

/// Compiled patterns for a single font.
#[derive(Debug, Clone)]
pub struct FontPatterns {
    pub font_name: String,
    pub build_file: Regex,
    pub file_reference: Regex,
    pub resources_entry: Regex,
}

impl FontPatterns {
    pub fn for_font(font_name: &str) -> Result<Self, PruneError> {
        let compile = |source: String| {
            Regex::new(&source).map_err(|e| PruneError::Pattern {
                font_name: font_name.to_string(),
                message: e.to_string(),
            })
        };

        Ok(FontPatterns {
            font_name: font_name.to_string(),
            build_file: compile(build_file_pattern(font_name))?,
            file_reference: compile(file_reference_pattern(font_name))?,
            resources_entry: compile(resources_entry_pattern(font_name))?,
        })
    }
}
