// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use std::{error, fmt, result};

use crate::lexer::Token;

pub type Result<T> = result::Result<T, Error>;

/// Errors within pascal
#[derive(Debug)]
pub enum Error {
    /// Character the lexer does not recognize
    UnknownCharacter(char),
    /// Parser expected one kind of token but found another
    UnexpectedToken {
        expected: &'static str,
        found: Token,
    },
    /// Variable read before any assignment to it
    UnknownVariable(String),
    /// Integer division by zero
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownCharacter(c) => write!(f, "unknown character: '{}'", c),
            Error::UnexpectedToken { expected, found } => {
                write!(f, "invalid syntax: expected {} but found {:?}", expected, found)
            }
            Error::UnknownVariable(name) => write!(f, "variable not found: {}", name),
            Error::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl error::Error for Error {}
