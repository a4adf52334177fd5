//! Guesswork CLI — play, script, or simulate an interactive range search.

pub mod config;
pub mod error;
pub mod repl;
pub mod report;
pub mod script;

pub use config::{resolve_range, RangeConfig};
pub use error::{CliError, CliResult};
pub use repl::PromptOracle;
