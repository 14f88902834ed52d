//! Hexduel engine library.
//!
//! Exposes the match data model, character registry, action/turn resolver,
//! legal-action enumeration, and protocol modules for use by integration
//! tests and the binary entry points.

pub mod movegen;
pub mod protocol;
pub mod registry;
pub mod resolve;
pub mod selfplay;
pub mod session;
pub mod state;
