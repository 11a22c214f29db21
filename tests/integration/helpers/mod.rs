use crate::helpers::project::Project;
use crate::helpers::project_builder::tempdir;

pub mod prelude;
pub mod project;

/// A git repository laid out like the extension boilerplates
pub fn create_template() -> Project {
    tempdir().with_default_manifests().init_git().build()
}
