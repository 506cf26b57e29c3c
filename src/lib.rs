pub mod checker;
pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod git;
pub mod output;
pub mod walker;

pub use error::{CommitGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 2;
/// Highest exit code reported for a failing commit message.
pub const MAX_EXIT_CODE: i32 = 255;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
