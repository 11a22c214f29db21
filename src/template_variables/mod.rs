mod authors;
mod project_dir;

pub use authors::get_default_author;
pub use project_dir::ProjectDir;
