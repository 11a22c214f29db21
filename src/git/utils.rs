use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use remove_dir_all::remove_dir_all;

use crate::error::{Error, Result};

/// remove context of repository by removing `.git` from filesystem
///
/// A project without `.git` is left untouched.
pub fn remove_history(project_dir: &Path) -> Result<()> {
    let git_dir = project_dir.join(".git");
    if !git_dir.is_dir() {
        debug!("no git history at {}", git_dir.display());
        return Ok(());
    }
    match remove_dir_all(&git_dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::Cleanup {
            path: git_dir,
            source,
        }),
    }
}
