//! Execution results and outcome counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mapping from measured bit-string to occurrence count.
///
/// Bit-strings follow the circuit's classical bit order with clbit 0 as the
/// leftmost character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty counts table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a bit-string.
    pub fn record(&mut self, bitstring: impl Into<String>) {
        self.insert(bitstring, 1);
    }

    /// Add `count` occurrences of a bit-string.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bit-string (0 if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct bit-strings observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether any outcome was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most frequently observed bit-string.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.sorted().into_iter().next()
    }

    /// Outcomes sorted by descending count, ties broken by bit-string.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(k, &v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        entries
    }

    /// Marginalize over a subset of bit positions.
    ///
    /// Keeps only the characters at `positions` (in the given order) of each
    /// bit-string and re-accumulates. This is how a multi-register result is
    /// split into per-register views, e.g. the syndrome bits vs the output
    /// bits of the ancilla-based corrector.
    pub fn marginal(&self, positions: &[usize]) -> Counts {
        let mut marginal = Counts::new();
        for (bitstring, &count) in &self.counts {
            let chars: Vec<char> = bitstring.chars().collect();
            let key: String = positions
                .iter()
                .filter_map(|&p| chars.get(p).copied())
                .collect();
            marginal.insert(key, count);
        }
        marginal
    }

    /// Iterate over all outcomes in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (bitstring, count)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{bitstring}\": {count}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

/// The result of executing a circuit for a number of shots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Outcome counts keyed by bit-string.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
