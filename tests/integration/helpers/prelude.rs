pub use assert_cmd::prelude::*;
pub use predicates::prelude::*;
pub use std::process::Command;

pub use super::create_template;
pub use super::project_builder::tempdir;

pub fn binary() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}
