//! Command line interface

pub mod args;
pub mod output;

pub use args::{Args, Command, OrderArg, RunMode, VerbosityLevel};
pub use output::OutputFormatter;
