#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! Tools to run programs written in BEEP.
//!
//! BEEP is a small line-oriented teaching language with variables, labels,
//! conditional and unconditional jumps, and print statements.

/// BEEP interpreter
pub mod beep;
/// Controls the command line interface
pub mod cli;
/// Crate errors
pub mod error;
