use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Terminal failures of a scaffolding run.
///
/// Validation problems never show up here: they are reported inline and the
/// question is asked again.
#[derive(Error, Debug)]
pub enum Error {
    #[error("aborted by user")]
    Cancelled,
    #[error("prompt failed: {0}")]
    Prompt(#[source] dialoguer::Error),
    #[error("target directory `{}` already exists, aborting", .0.display())]
    TargetExists(PathBuf),
    #[error("cannot clone `{url}`, please check if the Git user / repository exists")]
    Fetch {
        url: String,
        #[source]
        source: git2::Error,
    },
    #[error("`{}` not found within the cloned template", .0.display())]
    MissingDocument(PathBuf),
    #[error("cannot read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{}` is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{}` must contain a JSON object", .0.display())]
    NotAnObject(PathBuf),
    #[error("cannot write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot remove git history at `{}`", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(ref io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Self::Cancelled
            }
            _ => Self::Prompt(e),
        }
    }
}
