// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use std::{error, fmt, result};

pub type Result<T> = result::Result<T, Error>;

/// Errors within geom
#[derive(Debug)]
pub enum Error {
    /// Malformed JSON, or JSON of the wrong shape
    Json(serde_json::Error),
    /// A coordinate in JSON was a number, but not an integer
    NonIntegerCoordinate(&'static str),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::NonIntegerCoordinate(axis) => {
                write!(f, "coordinate '{}' is not an integer", axis)
            }
        }
    }
}

impl error::Error for Error {}
