//! Font names handled by the pruner.
//!
//! The default list is the set of icon fonts shipped by `react-native-vector-icons`. These are
//! the files autolinking already copies into the app bundle, so a second manual resource entry
//! for any of them makes Xcode fail with duplicate outputs.

use log::warn;
use std::collections::HashSet;

/// Relative path under which the project file references the vector-icon fonts.
pub const VECTOR_ICONS_FONT_DIR: &str = "../node_modules/react-native-vector-icons/Fonts/";

/// Icon fonts bundled with `react-native-vector-icons`.
pub const DEFAULT_FONT_NAMES: &[&str] = &[
    "AntDesign.ttf",
    "Entypo.ttf",
    "EvilIcons.ttf",
    "Feather.ttf",
    "FontAwesome.ttf",
    "FontAwesome5_Brands.ttf",
    "FontAwesome5_Regular.ttf",
    "FontAwesome5_Solid.ttf",
    "FontAwesome6_Brands.ttf",
    "FontAwesome6_Regular.ttf",
    "FontAwesome6_Solid.ttf",
    "Fontisto.ttf",
    "Foundation.ttf",
    "Ionicons.ttf",
    "MaterialCommunityIcons.ttf",
    "MaterialIcons.ttf",
    "Octicons.ttf",
    "SimpleLineIcons.ttf",
    "Zocial.ttf",
];

/// Returns an owned copy of [`DEFAULT_FONT_NAMES`].
pub fn default_font_names() -> Vec<String> {
    DEFAULT_FONT_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Returns true if `name` is one of the bundled vector-icon fonts (case-sensitive).
pub fn is_default_font(name: &str) -> bool {
    DEFAULT_FONT_NAMES.contains(&name)
}

/// Path the project file uses for a vector-icon font, e.g.
/// `../node_modules/react-native-vector-icons/Fonts/Feather.ttf`.
pub fn vector_icons_path(font_name: &str) -> String {
    format!("{}{}", VECTOR_ICONS_FONT_DIR, font_name)
}

/// Trims names, drops blanks and removes duplicates while keeping first-seen order.
pub fn normalize_font_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for name in names {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            warn!("Skipping blank font name");
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            result.push(trimmed.to_string());
        }
    }
    result
}
