//! Scaffold a Chrome extension project: ask a few questions, clone the
//! boilerplate for the chosen language, rewrite its manifests and drop its
//! git history.

pub mod app_log;
pub mod args;
pub mod error;
pub mod git;
pub mod interactive;
pub mod manifest;
mod progressbar;
pub mod project_variables;
pub mod template;
pub mod template_variables;
pub mod user_parsed_input;

use std::path::{Path, PathBuf};

use console::style;
use log::info;

pub use error::{Error, Result};
pub use template::{Language, Template};
pub use template_variables::ProjectDir;
pub use user_parsed_input::UserParsedInput;

/// Create the project for `input` below `base_dir` from `template`.
///
/// Stages run strictly in order and the first failure stops the run; nothing
/// already done is undone.
pub fn generate(
    input: &UserParsedInput,
    template: &Template,
    base_dir: &Path,
) -> Result<PathBuf> {
    let project_dir = ProjectDir::new(base_dir, input);

    info!(
        "🔧 {}",
        style(format!(
            "Creating a Chrome extension in ./{} ...",
            project_dir.name()
        ))
        .bold()
        .yellow()
    );

    git::clone_template(&template.url, &project_dir)?;

    manifest::rewrite_package_json(project_dir.as_ref(), input)?;
    if let Some(extension_manifest) = &template.extension_manifest {
        manifest::rewrite_extension_manifest(
            project_dir.as_ref(),
            extension_manifest,
            input.name(),
        )?;
    }

    git::remove_history(project_dir.as_ref())?;

    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New extension created").bold(),
        style(&project_dir).underlined()
    );
    info!(
        "Now just `npm install` using your favorite package manager and create your Chrome extension!"
    );

    Ok(project_dir.as_ref().to_path_buf())
}
