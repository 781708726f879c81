// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

mod error;
mod interp;
mod lexer;
mod parser;

pub use error::*;
pub use interp::*;
pub use lexer::*;
pub use parser::*;
