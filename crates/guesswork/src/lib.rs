//! Guesswork — interactive binary search over an integer range.
//!
//! An [`Oracle`] classifies each guess as a match, too low, or too high;
//! [`search`] narrows the candidate until the target is confirmed or only
//! one value is left.

pub mod oracle;
pub mod range;
pub mod search;
pub mod types;

pub use oracle::{Oracle, ScriptedOracle, TargetOracle};
pub use range::{Candidate, SearchRange, DEFAULT_HIGH, DEFAULT_LOW};
pub use search::{max_steps, search};
pub use types::*;
