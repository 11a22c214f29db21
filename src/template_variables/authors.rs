use std::env;

/// Author suggested by the author prompt.
///
/// `GIT_AUTHOR_NAME` wins over `user.name` from the user's git configuration.
pub fn get_default_author() -> Option<String> {
    author_from(env::var("GIT_AUTHOR_NAME").ok(), || {
        git2::Config::open_default()
            .and_then(|config| config.get_string("user.name"))
            .ok()
    })
}

fn author_from(
    env_author: Option<String>,
    gitconfig_author: impl FnOnce() -> Option<String>,
) -> Option<String> {
    env_author
        .filter(|a| !a.trim().is_empty())
        .or_else(gitconfig_author)
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
}
