use std::env;

use anyhow::Result;
use console::style;
use log::warn;

use crx_init::app_log::log_env_init;
use crx_init::args::resolve_args;
use crx_init::{generate, interactive, Error};

fn main() -> Result<()> {
    log_env_init();
    resolve_args();

    // nothing touches the disk or the network before every answer is in
    let input = match interactive::collect_answers() {
        Ok(input) => input,
        Err(Error::Cancelled) => {
            warn!("{}", style("Aborted, nothing was created.").bold());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let base_dir = env::current_dir()?;
    generate(&input, &input.language().template(), &base_dir)?;
    Ok(())
}
