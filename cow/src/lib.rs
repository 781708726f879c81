// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

mod error;
mod interp;

pub use error::*;
pub use interp::*;
