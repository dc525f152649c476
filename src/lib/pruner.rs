//! The font reference pruner.
//!
//! [`FontPruner`] holds the compiled patterns for a list of fonts and applies them to a project
//! file held in memory. Passes run in this order:
//!
//! 1. for each font, remove its `PBXBuildFile` entries, then its `PBXFileReference` entries;
//! 2. inside the resources build phase section only, remove `<id> /* F in Resources */,`
//!    list members for every font.
//!
//! Each font's patterns only ever match text naming that font, so the per-font passes commute
//! and the order of the font list does not change the result.

use crate::fonts::normalize_font_names;
use crate::patterns::{FontPatterns, RESOURCES_SECTION_RE};
use crate::PruneError;
use log::debug;
use regex::{Captures, Regex};

/// Number of entries removed by a pruning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    pub build_files: usize,
    pub file_references: usize,
    pub resource_entries: usize,
}

impl PruneStats {
    pub fn total(&self) -> usize {
        self.build_files + self.file_references + self.resource_entries
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Removes font entries from project file text.
#[derive(Debug, Clone)]
pub struct FontPruner {
    fonts: Vec<FontPatterns>,
}

impl FontPruner {
    /// Compiles patterns for `font_names`. Blank and repeated names are dropped.
    pub fn new<I, S>(font_names: I) -> Result<Self, PruneError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fonts = normalize_font_names(font_names)
            .iter()
            .map(|name| FontPatterns::for_font(name))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Compiled patterns for {} font(s)", fonts.len());
        Ok(FontPruner { fonts })
    }

    /// Font names in processing order.
    pub fn font_names(&self) -> impl Iterator<Item = &str> {
        self.fonts.iter().map(|p| p.font_name.as_str())
    }

    /// Returns the pruned text together with removal counts.
    ///
    /// Text that matches none of the patterns comes back unchanged.
    pub fn prune_text(&self, content: &str) -> (String, PruneStats) {
        let mut stats = PruneStats::default();
        let mut buffer = content.to_string();

        for font in &self.fonts {
            let (next, removed) = remove_all(&font.build_file, &buffer);
            if removed > 0 {
                debug!("{}: removed {} PBXBuildFile entr(ies)", font.font_name, removed);
            }
            stats.build_files += removed;
            buffer = next;

            let (next, removed) = remove_all(&font.file_reference, &buffer);
            if removed > 0 {
                debug!("{}: removed {} PBXFileReference entr(ies)", font.font_name, removed);
            }
            stats.file_references += removed;
            buffer = next;
        }

        let mut resource_entries = 0;
        let buffer = RESOURCES_SECTION_RE
            .replace_all(&buffer, |caps: &Captures| {
                let mut section = caps[0].to_string();
                for font in &self.fonts {
                    let (next, removed) = remove_all(&font.resources_entry, &section);
                    if removed > 0 {
                        debug!("{}: removed {} resources list entr(ies)", font.font_name, removed);
                    }
                    resource_entries += removed;
                    section = next;
                }
                section
            })
            .into_owned();
        stats.resource_entries = resource_entries;

        (buffer, stats)
    }
}

/// Deletes every match of `re` in `text`, returning the new text and the number of matches.
fn remove_all(re: &Regex, text: &str) -> (String, usize) {
    let mut count = 0;
    let out = re
        .replace_all(text, |_: &Captures| {
            count += 1;
            ""
        })
        .into_owned();
    (out, count)
}
