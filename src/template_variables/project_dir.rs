use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use console::style;
use log::warn;

use crate::error::{Error, Result};
use crate::user_parsed_input::UserParsedInput;

/// Directory the template is cloned into: `<base>/<package name>`.
#[derive(Debug, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    pub fn new(base_path: &Path, user_parsed_input: &UserParsedInput) -> Self {
        let name = user_parsed_input.name();
        let dir_name = user_parsed_input.package_name();
        if dir_name != name {
            warn!(
                "{} `{}` {} `{}`{}",
                style("Renaming project called").bold(),
                style(name).bold().yellow(),
                style("to").bold(),
                style(&dir_name).bold().green(),
                style("...").bold()
            );
        }
        Self(base_path.join(dir_name))
    }

    /// Cloning never goes into an existing path.
    pub fn ensure_vacant(&self) -> Result<()> {
        if self.0.exists() {
            return Err(Error::TargetExists(self.0.clone()));
        }
        Ok(())
    }

    pub fn name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
