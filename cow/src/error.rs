// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use std::{error, fmt, io, result};

pub type Result<T> = result::Result<T, Error>;

/// Errors within cow
#[derive(Debug)]
pub enum Error {
    /// Loop start (`MOO`) with no matching loop end
    UnmatchedLoopStart(usize),
    /// Loop end (`moo`) with no matching loop start
    UnmatchedLoopEnd(usize),
    /// Pointer moved left of the first cell
    PointerUnderflow,
    /// IO errors from the program's input or output stream
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnmatchedLoopStart(i) => {
                write!(f, "unmatched loop start at instruction #{}", i)
            }
            Error::UnmatchedLoopEnd(i) => write!(f, "unmatched loop end at instruction #{}", i),
            Error::PointerUnderflow => write!(f, "pointer moved left of the first cell"),
            Error::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl error::Error for Error {}
