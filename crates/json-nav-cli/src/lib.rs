//! Command-line front end for `json-nav`.
//!
//! The `json-with` binary is a thin wrapper over [`json_cli`], which holds
//! argument parsing and the document transformation so both can be tested
//! without spawning a process.

pub mod json_cli;
pub mod logging;
