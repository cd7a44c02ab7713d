use std::path::PathBuf;

use thiserror::Error;

pub type OptionsResult<T> = Result<T, OptionsError>;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read chart description {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid chart description: {0}")]
    DecodeInput(String),

    #[error("invalid chart options: {0}")]
    Serialize(String),
}
