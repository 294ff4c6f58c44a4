//! CLI module for cinematch.
//!
//! - Argument parsing
//! - Command execution (health check, streamed or buffered recommendations)
//!
//! # Usage
//!
//! ```ignore
//! use cinematch::cancel::CancelSignal;
//! use cinematch::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! run_cli_command(command, CancelSignal::never()).await?;
//! ```

pub mod args;
pub mod run;

pub use args::{parse_args, ArgsError, CliCommand, RecommendArgs, USAGE};
pub use run::run_cli_command;

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }
}
