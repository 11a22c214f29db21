mod clone;
mod utils;

pub use clone::clone_template;
pub use utils::remove_history;
