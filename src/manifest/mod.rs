//! Read-merge-write of the JSON documents found in a freshly cloned template

mod extension;
mod package_json;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub use extension::rewrite_extension_manifest;
pub use package_json::{rewrite_package_json, sort_package_json, PACKAGE_JSON, STRIPPED_KEYS};

/// Fails with [`Error::MissingDocument`] instead of letting the read trip over it.
pub fn locate_document(project_dir: &Path, relative: &str) -> Result<PathBuf> {
    let path = project_dir.join(relative);
    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::MissingDocument(path))
    }
}

pub fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject(path.to_path_buf())),
    }
}

/// Two-space indentation plus a final newline, written in one go.
pub fn write_json_object(path: &Path, object: Map<String, Value>) -> Result<()> {
    let mut contents =
        serde_json::to_string_pretty(&Value::Object(object)).map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;
    contents.push('\n');
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
