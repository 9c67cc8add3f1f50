// src/file.rs
//
// JSON output in two passes:
//   1. `write_passives` serializes the sorted map, 4-space indent, UTF-8.
//   2. `clean_json_file` reads the file back as a value tree, tightens
//      " %" → "%" in every string, and rewrites it with the same layout.
// The cleanup walks parsed values, never the raw text, so keys and
// structure are never touched.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

use crate::config::consts::JSON_INDENT;
use crate::core::sanitize::tighten_percent;
use crate::error::{Error, Result};
use crate::store::PassiveMap;

/// Serialize `value` to `path` (create/truncate), indented with `JSON_INDENT`.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser).map_err(|e| Error::json(path, e))?;
    out.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

pub fn write_passives(path: &Path, map: &PassiveMap) -> Result<()> {
    write_json_pretty(path, map)?;
    logf!("Wrote {} passives to {}", map.len(), path.display());
    Ok(())
}

pub fn read_passives(path: &Path) -> Result<PassiveMap> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, e))
}

/// Rewrite any JSON file in place with spaces before `%` removed from every string.
/// Object key order is preserved.
pub fn clean_json_file(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let data: Value = serde_json::from_str(&text).map_err(|e| Error::json(path, e))?;
    let cleaned = clean_spaces(data);
    write_json_pretty(path, &cleaned)?;
    logf!("Cleaned {}", path.display());
    Ok(())
}

/// Recursive part of `clean_json_file`. Object keys, numbers, bools and null pass through.
pub fn clean_spaces(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(tighten_percent(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(clean_spaces).collect()),
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, clean_spaces(v))).collect())
        }
        other => other,
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let msg = format!("path exists but is not a directory: {}", dir.display());
        return Err(Error::io(dir, std::io::Error::other(msg)));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
