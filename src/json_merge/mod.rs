//! Deep-merge JSON materializer
//!
//! Writes structured configuration into an existing JSON file without
//! clobbering unrelated keys. Callers address nested fields with dotted
//! paths (`"scripts.android"`), and may pass a second mapping whose
//! top-level keys replace whatever the dotted merge produced.
//!
//! # Example
//!
//! ```no_run
//! use lz_dapp::json_merge;
//! use serde_json::{json, Map, Value};
//! use std::path::Path;
//!
//! let mut overlay = Map::new();
//! overlay.insert("scripts.android".into(), json!("expo run:android"));
//!
//! let mut verbatim = Map::new();
//! verbatim.insert("husky".into(), json!({ "hooks": { "pre-push": "test" } }));
//!
//! json_merge::merge_into_file(Path::new("package.json"), &overlay, Some(&verbatim))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::Path;

/// Flatten a JSON value into dot-joined path keys.
///
/// Array indices become path segments (`"keywords.0"`). Scalars and empty
/// containers are leaves. A `.` or `\` inside an object key is escaped with
/// `\`, and all-digit object keys get a leading `\`, so [`unflatten`]
/// restores the original value exactly.
pub fn flatten(value: &Value) -> Map<String, Value> {
    internal::flatten(value)
}

/// Rebuild a nested value from dot-joined path keys.
///
/// An unescaped numeric segment indexes or appends to an array. An index
/// past the end of an array, or any other segment, addresses an object key.
/// When two paths disagree about the shape of a node, the later path wins.
pub fn unflatten(flat: Map<String, Value>) -> Value {
    internal::unflatten(flat)
}

/// Merge dotted-path values (and an optional verbatim mapping) into a JSON file
///
/// # Process
///
/// 1. Create the file as `{}` if it doesn't exist
/// 2. Parse the current content
/// 3. Write each dotted-path value at its path, replacing whatever was
///    there (caller wins); keys not on any path are left untouched
/// 4. Replace top-level keys from `verbatim`
/// 5. Write back with two-space indentation
///
/// Dotted paths use the [`flatten`] escaping, so `"dependencies.lodash\\.merge"`
/// addresses the `lodash.merge` key.
///
/// # Errors
///
/// Returns an error if the file can't be read or written, if its content is
/// not valid JSON, or if its root is not an object. Nothing is written in
/// the parse-failure case.
pub fn merge_into_file(
    path: &Path,
    overlay: &Map<String, Value>,
    verbatim: Option<&Map<String, Value>>,
) -> Result<()> {
    internal::merge_into_file(path, overlay, verbatim)
}
