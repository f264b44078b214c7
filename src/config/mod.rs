//! Configuration loading and types.

pub mod env;
pub mod types;

pub use types::*;
