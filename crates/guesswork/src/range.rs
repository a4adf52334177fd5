//! The immutable search range and the candidate cursors that narrow over it.

use crate::types::{SearchError, SearchResult};

/// Lowest value of the default range.
pub const DEFAULT_LOW: i64 = 1;

/// Highest value of the default range (inclusive).
pub const DEFAULT_HIGH: i64 = 2_097_150;

/// Ordered, strictly ascending, non-empty sequence of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRange {
    values: Values,
}

/// Backing storage. Consecutive ranges are computed, never materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Values {
    Listed(Vec<i64>),
    Consecutive { low: i64, len: usize },
}

impl SearchRange {
    /// Build a range from arbitrary values, rejecting empty or unordered input.
    pub fn new(values: Vec<i64>) -> SearchResult<Self> {
        if values.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        if let Some(index) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SearchError::Unsorted { index: index + 1 });
        }
        Ok(Self {
            values: Values::Listed(values),
        })
    }

    /// Build the consecutive range `low..=high`.
    ///
    /// Fails with `RangeTooLarge` when the value count does not fit in `usize`.
    pub fn from_bounds(low: i64, high: i64) -> SearchResult<Self> {
        if low > high {
            return Err(SearchError::InvalidBounds { low, high });
        }
        let len = usize::try_from(i128::from(high) - i128::from(low) + 1)
            .map_err(|_| SearchError::RangeTooLarge { low, high })?;
        Ok(Self {
            values: Values::Consecutive { low, len },
        })
    }

    pub fn len(&self) -> usize {
        match &self.values {
            Values::Listed(values) => values.len(),
            Values::Consecutive { len, .. } => *len,
        }
    }

    /// Whether the range has no values; never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> i64 {
        self.at(0)
    }

    pub fn last(&self) -> i64 {
        self.at(self.len() - 1)
    }

    /// Candidate covering the whole range.
    pub fn full(&self) -> Candidate {
        Candidate {
            low: 0,
            high: self.len(),
        }
    }

    /// Value at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<i64> {
        (index < self.len()).then(|| self.at(index))
    }

    /// Value at `index`. The index must be below `len()`; indices taken from
    /// a non-empty candidate of this range always are.
    pub(crate) fn at(&self, index: usize) -> i64 {
        match &self.values {
            Values::Listed(values) => values[index],
            // low + index <= high, so the sum fits back into i64.
            Values::Consecutive { low, .. } => (i128::from(*low) + index as i128) as i64,
        }
    }
}

impl Default for SearchRange {
    fn default() -> Self {
        Self {
            values: Values::Consecutive {
                low: DEFAULT_LOW,
                len: (DEFAULT_HIGH - DEFAULT_LOW + 1) as usize,
            },
        }
    }
}

/// Half-open index window `low..high` into a [`SearchRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub low: usize,
    pub high: usize,
}

impl Candidate {
    pub fn len(&self) -> usize {
        self.high.saturating_sub(self.low)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Floor midpoint index.
    pub fn midpoint(&self) -> usize {
        self.low + self.len() / 2
    }

    /// Window strictly above `index`.
    pub fn above(&self, index: usize) -> Candidate {
        Candidate {
            low: index + 1,
            high: self.high,
        }
    }

    /// Window strictly below `index`.
    pub fn below(&self, index: usize) -> Candidate {
        Candidate {
            low: self.low,
            high: index,
        }
    }
}
