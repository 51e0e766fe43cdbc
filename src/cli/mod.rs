//! Command-line driver: inline graph descriptions and command implementations.

pub mod commands;
pub mod input;

pub use input::{GraphSpec, Representation};
