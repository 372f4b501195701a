//! CLI command implementations.

pub mod bands;
pub mod compute;
