use polyshape::path::PolygonError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Polygon(#[from] PolygonError),
    #[error("Invalid value for --{name}: {value:?}")]
    Argument { name: &'static str, value: String },
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Io(err.into())
    }
}
