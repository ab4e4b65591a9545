//! Command handlers.
//!
//! Each submodule exposes a single `execute` function that receives parsed
//! arguments plus the ambient pieces it needs (config, output manager) and
//! returns a [`crate::error::CliResult`].

pub mod completions;
pub mod new;
