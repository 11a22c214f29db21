use std::path::Path;

use log::debug;

use super::{locate_document, read_json_object, write_json_object};
use crate::error::Result;

/// Set the display name of the extension manifest at `<project>/<relative>`.
///
/// Every other key keeps its value and position.
pub fn rewrite_extension_manifest(project_dir: &Path, relative: &str, name: &str) -> Result<()> {
    let path = locate_document(project_dir, relative)?;
    let mut manifest = read_json_object(&path)?;
    debug!("rewriting {}", path.display());
    manifest.insert("name".into(), name.into());
    write_json_object(&path, manifest)
}
