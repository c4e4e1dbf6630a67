use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unable to find exiftool. Is it installed and in your PATH?")]
    ToolNotFound,

    #[error("unable to run exiftool")]
    Spawn(#[from] std::io::Error),

    #[error("exiftool failed while {action} (exit code {code:?}): {stderr}")]
    ToolFailed {
        action: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("coordinates not specified")]
    MissingCoordinates,

    #[error("coordinates not specified: unknown alias '{0}'")]
    UnknownAlias(String),

    #[error("coordinates not specified: no GPS tags found in source file {0:?}")]
    NoSourceCoordinates(PathBuf),

    #[error("invalid filename specified: {0:?}")]
    InvalidFilename(PathBuf),
}
