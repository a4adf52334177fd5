//! The interactive range search loop.
//!
//! The candidate is a pair of cursors into the one backing range. Each step
//! asks the oracle about the floor midpoint and replaces the candidate with
//! the window strictly above or strictly below the guess, so a guess is never
//! presented twice.

use crate::oracle::Oracle;
use crate::range::SearchRange;
use crate::types::{Guess, Reply, Resolution, SearchError, SearchOutcome, SearchResult, Step};

/// Run a search over `range`, asking `oracle` to classify each guess.
pub fn search<O: Oracle + ?Sized>(
    range: &SearchRange,
    oracle: &mut O,
) -> SearchResult<SearchOutcome> {
    // Invariant: `candidate` is non-empty and within `range` at the top of
    // every iteration, so `range.at` never sees an out-of-bounds index.
    let mut candidate = range.full();
    let mut steps = Vec::new();

    loop {
        if candidate.len() == 1 {
            let value = range.at(candidate.low);
            tracing::debug!(value, steps = steps.len(), "Candidate narrowed to one value");
            return Ok(SearchOutcome {
                value,
                resolution: Resolution::Narrowed,
                steps,
            });
        }

        let mid = candidate.midpoint();
        let guess = Guess {
            step: steps.len() + 1,
            value: range.at(mid),
            low: range.at(candidate.low),
            high: range.at(candidate.high - 1),
        };
        tracing::debug!(
            step = guess.step,
            guess = guess.value,
            low = guess.low,
            high = guess.high,
            "Presenting guess"
        );

        let reply = oracle.classify(&guess)?;
        steps.push(Step { guess, reply });

        candidate = match reply {
            Reply::Match => {
                tracing::info!(value = guess.value, steps = steps.len(), "Target confirmed");
                return Ok(SearchOutcome {
                    value: guess.value,
                    resolution: Resolution::Confirmed,
                    steps,
                });
            }
            Reply::TargetAbove => candidate.above(mid),
            Reply::TargetBelow => candidate.below(mid),
        };

        if candidate.is_empty() {
            tracing::warn!(step = guess.step, "Replies left no candidates");
            return Err(SearchError::EmptyRange { step: guess.step });
        }
    }
}

/// Upper bound on classification steps for a range of `len` values.
pub fn max_steps(len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    // ceil(log2(len)) + 1
    (usize::BITS - (len - 1).leading_zeros()) as usize + 1
}
