//! Loading, merging and saving flat `key -> string` translation files.
//!
//! Saved files are deterministic: keys are ordered by code point, keys whose value is
//! still empty are grouped after all translated keys, and the JSON is indented with
//! four spaces so the files diff cleanly after every download.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::error::{Result, SyncError};

/// Translations of one language, keyed by message key.
pub type TranslationMap = BTreeMap<String, String>;

/// Load and merge the given source files into a single map.
///
/// Glob patterns are expanded (matches in sorted order). An empty file or a file
/// containing `null` contributes nothing. A key defined by more than one file is an
/// error.
pub fn load(source_files: &[PathBuf]) -> Result<TranslationMap> {
    let mut result = TranslationMap::new();

    for path in resolve_source_files(source_files)? {
        for (key, value) in parse_file(&path)? {
            if result.contains_key(&key) {
                return Err(SyncError::DuplicateKey { key, path });
            }
            result.insert(key, value);
        }
    }

    Ok(result)
}

/// Expand glob patterns; literal paths pass through unchanged.
pub fn resolve_source_files(source_files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut resolved = Vec::new();

    for source in source_files {
        let pattern = source.to_string_lossy();
        if !is_glob_pattern(&pattern) {
            resolved.push(source.clone());
            continue;
        }

        let entries = glob::glob(&pattern).map_err(|e| {
            SyncError::config(format!("Invalid source file pattern \"{}\": {}", pattern, e))
        })?;
        let mut matches = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                SyncError::io(path, e.into())
            })?;
            matches.push(path);
        }
        if matches.is_empty() {
            tracing::warn!("No source file matches {}", pattern);
        }
        matches.sort();
        resolved.extend(matches);
    }

    Ok(resolved)
}

pub(crate) fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn parse_file(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let json: Value = serde_json::from_str(&content).map_err(|source| SyncError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let object = match json {
        Value::Null => return Ok(Vec::new()),
        Value::Object(object) => object,
        other => {
            return Err(SyncError::NotFlatObject {
                path: path.to_path_buf(),
                reason: format!("root is {}", json_kind(&other)),
            });
        }
    };

    object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(text) => Ok((key, text)),
            other => Err(SyncError::NotFlatObject {
                path: path.to_path_buf(),
                reason: format!("value of '{}' is {}", key, json_kind(&other)),
            }),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Keys in persisted order: translated keys first, then untranslated ones, each group
/// sorted by code point.
pub fn sorted_entries(map: &TranslationMap) -> Vec<(&str, &str)> {
    let (translated, untranslated): (Vec<_>, Vec<_>) = map
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .partition(|(_, v)| !v.is_empty());

    translated.into_iter().chain(untranslated).collect()
}

/// Render the map as it is written to disk.
pub fn render(map: &TranslationMap) -> Result<String> {
    let object: Map<String, Value> = sorted_entries(map)
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    Value::Object(object).serialize(&mut serializer)?;

    let mut content = String::from_utf8_lossy(&buf).into_owned();
    content.push('\n');
    Ok(content)
}

/// Write the map to `path`, creating parent directories as needed.
///
/// The whole file is rendered before anything touches the disk.
pub fn save(path: &Path, map: &TranslationMap) -> Result<()> {
    let content = render(map)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| SyncError::io(path, e))
}

/// Give every map the union of all keys; missing keys get an empty value.
pub fn reconcile_key_set<'a, I>(maps: I)
where
    I: IntoIterator<Item = &'a mut TranslationMap>,
{
    let mut maps: Vec<&mut TranslationMap> = maps.into_iter().collect();
    let keys: BTreeSet<String> = maps.iter().flat_map(|m| m.keys().cloned()).collect();

    for map in maps.iter_mut() {
        for key in &keys {
            map.entry(key.clone()).or_default();
        }
    }
}
