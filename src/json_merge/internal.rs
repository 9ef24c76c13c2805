//! Internal implementation for the deep-merge materializer

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const SEPARATOR: char = '.';
const ESCAPE: char = '\\';

/// One step of a dotted path.
///
/// `index` is set only for unescaped, canonical decimal segments, so an
/// escaped `\0` always addresses the object key `"0"`.
#[derive(Debug, PartialEq, Eq)]
struct Segment {
    key: String,
    index: Option<usize>,
}

impl Segment {
    fn new(key: String, escaped: bool) -> Self {
        let index = if escaped {
            None
        } else {
            key.parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == key)
        };
        Self { key, index }
    }
}

fn split_path(path: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut key = String::new();
    let mut escaped = false;
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => {
                escaped = true;
                if let Some(next) = chars.next() {
                    key.push(next);
                }
            }
            SEPARATOR => {
                segments.push(Segment::new(
                    std::mem::take(&mut key),
                    std::mem::take(&mut escaped),
                ));
            }
            c => key.push(c),
        }
    }
    segments.push(Segment::new(key, escaped));
    segments
}

/// Path segment for an object key. Separators and escapes are escaped, and
/// all-digit keys get a leading escape so they never read back as indices.
fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 1);
    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        out.push(ESCAPE);
    }
    for c in key.chars() {
        if c == SEPARATOR || c == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

pub fn flatten(value: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    flatten_into(value, None, &mut out);
    out
}

fn flatten_into(value: &Value, prefix: Option<&str>, out: &mut Map<String, Value>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(child, Some(&join(prefix, &escape_key(key))), out);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(child, Some(&join(prefix, &index.to_string())), out);
            }
        }
        leaf => {
            if let Some(path) = prefix {
                out.insert(path.to_string(), leaf.clone());
            }
        }
    }
}

fn join(prefix: Option<&str>, segment: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{SEPARATOR}{segment}"),
        None => segment.to_string(),
    }
}

pub fn unflatten(flat: Map<String, Value>) -> Value {
    let mut root = Value::Object(Map::new());
    for (path, value) in flat {
        set_path(&mut root, &split_path(&path), value);
    }
    root
}

/// Write `value` at `segments` under `root`, creating containers on demand.
///
/// Existing keys keep their position. A scalar in the way of a deeper path
/// is replaced.
fn set_path(root: &mut Value, segments: &[Segment], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut node = root;
    for (i, segment) in parents.iter().enumerate() {
        let slot = child_mut(node, segment);
        if !slot.is_object() && !slot.is_array() {
            *slot = if segments[i + 1].index == Some(0) {
                Value::Array(Vec::new())
            } else {
                Value::Object(Map::new())
            };
        }
        node = slot;
    }
    *child_mut(node, last) = value;
}

/// Child slot for `segment`, created as `null` if missing.
///
/// Arrays are indexed in place or appended to. Any other segment turns the
/// array into an object keyed by index.
fn child_mut<'a>(node: &'a mut Value, segment: &Segment) -> &'a mut Value {
    let in_array = matches!(
        (&*node, segment.index),
        (Value::Array(items), Some(index)) if index <= items.len()
    );
    if in_array {
        if let (Value::Array(items), Some(index)) = (node, segment.index) {
            if index == items.len() {
                items.push(Value::Null);
            }
            return &mut items[index];
        }
        unreachable!("checked above");
    }
    ensure_object(node)
        .entry(segment.key.clone())
        .or_insert(Value::Null)
}

/// Coerce `node` into an object. Array items keep their indices as keys.
fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        let map = match node.take() {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            _ => Map::new(),
        };
        *node = Value::Object(map);
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced with an object"),
    }
}

pub fn merge_into_file(
    path: &Path,
    dotted: &Map<String, Value>,
    verbatim: Option<&Map<String, Value>>,
) -> Result<()> {
    if !path.exists() {
        fs::write(path, "{}").with_context(|| format!("Failed to create {}", path.display()))?;
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mut merged: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    if !merged.is_object() {
        bail!("{} does not contain a JSON object", path.display());
    }

    // Only the addressed paths are touched; unrelated keys stay byte-for-byte.
    for (dotted_path, value) in dotted {
        set_path(&mut merged, &split_path(dotted_path), value.clone());
    }

    if let Some(verbatim) = verbatim {
        let root = ensure_object(&mut merged);
        for (key, value) in verbatim {
            root.insert(key.clone(), value.clone());
        }
    }

    let json = serde_json::to_string_pretty(&merged)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
