use std::path::Path;

use auth_git2::GitAuthenticator;
use git2::{build::RepoBuilder, FetchOptions, ProxyOptions, RemoteCallbacks, Repository};
use log::debug;

use crate::error::{Error, Result};
use crate::progressbar::spinner;
use crate::template_variables::ProjectDir;

/// Clone `url` into `project_dir`, which must not exist yet.
///
/// The clone is attempted once and is not bounded by a timeout.
pub fn clone_template(url: &str, project_dir: &ProjectDir) -> Result<()> {
    project_dir.ensure_vacant()?;

    let pb = spinner(format!("Cloning {url} ..."));
    let result = clone_repository(url, project_dir.as_ref());
    pb.finish_and_clear();

    result
        .map(|repository| debug!("cloned into {}", repository.path().display()))
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })
}

fn clone_repository(url: &str, destination: &Path) -> Result<Repository, git2::Error> {
    #[cfg(windows)]
    let authenticator = GitAuthenticator::default().try_ssh_agent(true);
    #[cfg(not(windows))]
    let authenticator = GitAuthenticator::default()
        .try_ssh_agent(true)
        .add_default_ssh_keys()
        .prompt_ssh_key_password(true)
        .try_password_prompt(3);

    let gitconfig = git2::Config::open_default()?;

    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(authenticator.credentials(&gitconfig));

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);

    if is_http_repo(url) {
        let mut proxy_options = ProxyOptions::new();
        proxy_options.auto();

        fetch_options.proxy_options(proxy_options);
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);
    builder.clone(url, destination)
}

fn is_http_repo(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
