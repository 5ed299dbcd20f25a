//! Transition trace for a machine run.
//!
//! The machine appends one record per successful transition. The trace
//! itself is an immutable value: `record` returns a new trace and never
//! mutates the receiver.

use crate::automaton::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single symbol-driven transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from.
    pub from: StateId,
    /// The input symbol that drove the transition.
    pub symbol: char,
    /// The state being transitioned to.
    pub to: StateId,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered trace of the transitions taken during a run.
///
/// # Example
///
/// ```rust
/// use finite_automaton::{RunTrace, TransitionRecord};
/// use chrono::Utc;
///
/// let trace = RunTrace::new();
/// let trace = trace.record(TransitionRecord {
///     from: "S0".to_string(),
///     symbol: '1',
///     to: "S1".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = trace.path();
/// assert_eq!(path.len(), 2); // S0 -> S1
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTrace {
    records: Vec<TransitionRecord>,
}

impl RunTrace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new trace. The receiver is left
    /// unchanged.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The sequence of states visited: the first record's `from`
    /// followed by every record's `to`. Empty for an empty trace.
    pub fn path(&self) -> Vec<&StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last transition, `None` for an
    /// empty trace.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of transitions taken.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no transition has been taken yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
