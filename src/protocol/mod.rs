//! Text protocol for the CLI driver: line commands and compact action
//! notation.

pub mod notation;
pub mod parser;
