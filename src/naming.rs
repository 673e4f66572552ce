//! Android resource file naming.
//!
//! Resource names may only contain lowercase letters, digits and
//! underscores. Source artwork exported for iOS usually carries a
//! `@2x`/`@3x` multiplier and designers like hyphens, so both are
//! rewritten:
//! - `icon@2x-test.png` → `icon_test.png`
//! - `ic-launcher.png` → `ic_launcher.png`

use crate::error::{IconError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn multiplier_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"@[0-9]+x").expect("multiplier pattern is valid"))
}

/// Strip every `@<digits>x` multiplier and turn hyphens into underscores.
///
/// Multipliers are removed before hyphens are replaced, so
/// `icon@2x-test.png` becomes `icon_test.png`. Removal repeats until no
/// multiplier is left, since cutting one out can join the text around it
/// into a new one (`@1@2xx` → `@1x`).
pub fn normalize_file_name(file_name: &str) -> String {
    let pattern = multiplier_suffix();
    let mut name = file_name.to_string();
    while pattern.is_match(&name) {
        name = pattern.replace_all(&name, "").into_owned();
    }
    name.replace('-', "_")
}

/// Normalized basename of `input`, used as the file name in every bucket.
pub fn output_file_name(input: &Path) -> Result<String> {
    let name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| IconError::InvalidFileName(input.to_path_buf()))?;
    Ok(normalize_file_name(name))
}
