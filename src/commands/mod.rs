//! Interactive command layer: parsing and dispatch.

pub mod dispatch;
pub mod parse;

pub use dispatch::execute;
pub use parse::{parse, Command};
