//! Sources of replies: anything that can classify a guess.

use std::collections::VecDeque;

use crate::types::{Guess, Reply, SearchError, SearchResult};

/// Classifies guesses on behalf of whoever knows the target.
pub trait Oracle {
    fn classify(&mut self, guess: &Guess) -> SearchResult<Reply>;
}

impl<F> Oracle for F
where
    F: FnMut(&Guess) -> SearchResult<Reply>,
{
    fn classify(&mut self, guess: &Guess) -> SearchResult<Reply> {
        self(guess)
    }
}

/// Replays raw reply tokens in order.
///
/// Tokens are parsed lazily so an invalid token surfaces at the step that
/// consumes it, exactly as a live driver would.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    tokens: VecDeque<String>,
}

impl ScriptedOracle {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from already-parsed replies.
    pub fn from_replies<I: IntoIterator<Item = Reply>>(replies: I) -> Self {
        Self::new(replies.into_iter().map(|r| r.token()))
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl Oracle for ScriptedOracle {
    fn classify(&mut self, guess: &Guess) -> SearchResult<Reply> {
        let token = self
            .tokens
            .pop_front()
            .ok_or(SearchError::ScriptExhausted { step: guess.step })?;
        token.parse()
    }
}

/// Answers consistently for a known target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetOracle {
    target: i64,
}

impl TargetOracle {
    pub fn new(target: i64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

impl Oracle for TargetOracle {
    fn classify(&mut self, guess: &Guess) -> SearchResult<Reply> {
        Ok(match self.target.cmp(&guess.value) {
            std::cmp::Ordering::Equal => Reply::Match,
            std::cmp::Ordering::Greater => Reply::TargetAbove,
            std::cmp::Ordering::Less => Reply::TargetBelow,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(step: usize, value: i64) -> Guess {
        Guess {
            step,
            value,
            low: 0,
            high: 100,
        }
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut oracle = ScriptedOracle::new([">", "<", "yes"]);
        assert_eq!(oracle.classify(&guess(1, 50)).unwrap(), Reply::TargetAbove);
        assert_eq!(oracle.classify(&guess(2, 75)).unwrap(), Reply::TargetBelow);
        assert_eq!(oracle.classify(&guess(3, 62)).unwrap(), Reply::Match);
        assert_eq!(oracle.remaining(), 0);
    }

    #[test]
    fn test_scripted_from_replies() {
        let mut oracle = ScriptedOracle::from_replies([Reply::TargetBelow, Reply::Match]);
        assert_eq!(oracle.remaining(), 2);
        assert_eq!(oracle.classify(&guess(1, 50)).unwrap(), Reply::TargetBelow);
        assert_eq!(oracle.classify(&guess(2, 25)).unwrap(), Reply::Match);
    }

    #[test]
    fn test_scripted_exhausted() {
        let mut oracle = ScriptedOracle::new(Vec::<String>::new());
        let err = oracle.classify(&guess(4, 50)).unwrap_err();
        assert!(matches!(err, SearchError::ScriptExhausted { step: 4 }));
    }

    #[test]
    fn test_scripted_invalid_token() {
        let mut oracle = ScriptedOracle::new(["sideways"]);
        let err = oracle.classify(&guess(1, 50)).unwrap_err();
        assert!(matches!(err, SearchError::InvalidReply { .. }));
    }

    #[test]
    fn test_target_oracle_compares() {
        let mut oracle = TargetOracle::new(42);
        assert_eq!(oracle.classify(&guess(1, 50)).unwrap(), Reply::TargetBelow);
        assert_eq!(oracle.classify(&guess(2, 25)).unwrap(), Reply::TargetAbove);
        assert_eq!(oracle.classify(&guess(3, 42)).unwrap(), Reply::Match);
    }

    #[test]
    fn test_closure_oracle() {
        let mut calls = 0;
        let mut oracle = |_: &Guess| -> SearchResult<Reply> {
            calls += 1;
            Ok(Reply::Match)
        };
        assert_eq!(oracle.classify(&guess(1, 7)).unwrap(), Reply::Match);
        drop(oracle);
        assert_eq!(calls, 1);
    }
}
