//! Submodule defining the error types for this crate's public operations.

mod clap_error;
mod lsap_error;

pub use clap_error::ClapError;
pub use lsap_error::LsapError;
