use crate::utils::parser::ParseError;
use molparams::core::io::settings::SettingsError;
use molparams::properties::RequestError;
use molparams::techniques::{BindError, UnknownSetError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    UnknownSet(#[from] UnknownSetError),

    #[error("Invalid property request: {0}")]
    Request(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(#[from] ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
