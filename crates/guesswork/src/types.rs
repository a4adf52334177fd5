//! Core data types for replies, recorded steps, and search outcomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Literal tokens accepted for each reply, canonical token first.
pub const MATCH_TOKENS: &[&str] = &["yes", "y"];
pub const ABOVE_TOKENS: &[&str] = &[">", "higher"];
pub const BELOW_TOKENS: &[&str] = &["<", "lower"];

/// Classification of a guess relative to the unseen target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reply {
    /// The guess is the target.
    Match,
    /// The guess is too low; the target lies strictly above it.
    TargetAbove,
    /// The guess is too high; the target lies strictly below it.
    TargetBelow,
}

impl Reply {
    /// The canonical token for this reply.
    pub fn token(self) -> &'static str {
        match self {
            Reply::Match => MATCH_TOKENS[0],
            Reply::TargetAbove => ABOVE_TOKENS[0],
            Reply::TargetBelow => BELOW_TOKENS[0],
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Reply {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let lowered = token.to_ascii_lowercase();
        if MATCH_TOKENS.contains(&lowered.as_str()) {
            Ok(Reply::Match)
        } else if ABOVE_TOKENS.contains(&lowered.as_str()) {
            Ok(Reply::TargetAbove)
        } else if BELOW_TOKENS.contains(&lowered.as_str()) {
            Ok(Reply::TargetBelow)
        } else {
            Err(SearchError::InvalidReply {
                token: token.to_string(),
            })
        }
    }
}

/// A guess presented to an oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// 1-based classification step.
    pub step: usize,
    pub value: i64,
    /// Smallest value still under consideration.
    pub low: i64,
    /// Largest value still under consideration.
    pub high: i64,
}

/// One classified guess in a finished or running search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub guess: Guess,
    pub reply: Reply,
}

/// How the search settled on its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The oracle replied with a match.
    Confirmed,
    /// The candidate narrowed to a single element.
    Narrowed,
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub value: i64,
    pub resolution: Resolution,
    pub steps: Vec<Step>,
}

impl SearchOutcome {
    /// Number of classification replies consumed.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Guess values in the order they were presented.
    pub fn guesses(&self) -> Vec<i64> {
        self.steps.iter().map(|s| s.guess.value).collect()
    }
}

/// Errors that can occur while building a range or running a search.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("Reply not understood: {token:?} (expected yes, > or <)")]
    InvalidReply { token: String },

    #[error("Replies contradict each other: no candidates left after step {step}")]
    EmptyRange { step: usize },

    #[error("Search range is empty")]
    EmptyInput,

    #[error("Search range is not strictly ascending at index {index}")]
    Unsorted { index: usize },

    #[error("Invalid bounds: low {low} is greater than high {high}")]
    InvalidBounds { low: i64, high: i64 },

    #[error("Range {low}..={high} holds too many values to search")]
    RangeTooLarge { low: i64, high: i64 },

    #[error("Reply script ran out at step {step}")]
    ScriptExhausted { step: usize },

    #[error("Search abandoned at step {step}")]
    Abandoned { step: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_tokens() {
        assert_eq!("yes".parse::<Reply>().unwrap(), Reply::Match);
        assert_eq!(">".parse::<Reply>().unwrap(), Reply::TargetAbove);
        assert_eq!("<".parse::<Reply>().unwrap(), Reply::TargetBelow);
    }

    #[test]
    fn test_parse_trims_and_ignores_case() {
        assert_eq!("  YES \n".parse::<Reply>().unwrap(), Reply::Match);
        assert_eq!("Higher".parse::<Reply>().unwrap(), Reply::TargetAbove);
        assert_eq!(" lower".parse::<Reply>().unwrap(), Reply::TargetBelow);
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = "maybe".parse::<Reply>().unwrap_err();
        match err {
            SearchError::InvalidReply { token } => assert_eq!(token, "maybe"),
            other => panic!("unexpected error: {other}"),
        }
        assert!("".parse::<Reply>().is_err());
        assert!(">>".parse::<Reply>().is_err());
    }

    #[test]
    fn test_canonical_token_roundtrip() {
        for reply in [Reply::Match, Reply::TargetAbove, Reply::TargetBelow] {
            assert_eq!(reply.to_string().parse::<Reply>().unwrap(), reply);
        }
    }

    #[test]
    fn test_step_serializes_flat() {
        let step = Step {
            guess: Guess {
                step: 1,
                value: 5,
                low: 1,
                high: 10,
            },
            reply: Reply::TargetAbove,
        };
        let json = serde_json::to_value(step).unwrap();
        assert_eq!(json["value"], 5);
        assert_eq!(json["reply"], "target_above");
    }
}
