// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

mod error;
mod point;

pub use error::*;
pub use point::*;
