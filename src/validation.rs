//! Input validation for the two values collected from the user.
//!
//! Both functions return the human-readable reason on rejection so the
//! prompt layer can show it and ask again.

use regex::Regex;
use std::sync::OnceLock;

/// Name used when the user accepts the default
pub const DEFAULT_NAME: &str = "react-native-lz-dapp-v2";

/// URI scheme used when the user accepts the default
pub const DEFAULT_URI_SCHEME: &str = "reactnative";

/// Letters, digits and hyphens, any case.
fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^[a-z0-9-]+$").expect("Invalid project name regex"))
}

fn uri_scheme_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]+$").expect("Invalid URI scheme regex"))
}

/// Validate a project name.
///
/// Rules are checked in order and the first failing rule wins:
/// non-empty, `[a-z0-9-]` only (case-insensitive), no leading digit,
/// no leading hyphen.
pub fn validate_name(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Name cannot be empty.".to_string());
    }
    if !name_regex().is_match(value) {
        return Err(
            "Name must be alphanumeric and contain no special characters other than a hyphen."
                .to_string(),
        );
    }
    if value.starts_with(|c: char| c.is_ascii_digit()) {
        return Err("Name cannot begin with a number.".to_string());
    }
    if value.starts_with('-') {
        return Err("Name cannot begin with a hyphen.".to_string());
    }
    Ok(())
}

/// Validate a URI scheme: lowercase ASCII letters and digits only.
pub fn validate_uri_scheme(value: &str) -> Result<(), String> {
    if uri_scheme_regex().is_match(value) {
        Ok(())
    } else {
        Err("Only lowercase alphanumeric characters are allowed.".to_string())
    }
}
