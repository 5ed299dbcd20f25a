//! Construction errors for the five-tuple validator.

use super::StateId;
use thiserror::Error;

/// Errors raised by [`FiniteAutomaton::new`](super::FiniteAutomaton::new).
///
/// Validation short-circuits: the first violated invariant is returned
/// and later checks do not run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    /// Q (the set of states) is empty.
    #[error("Q (the set of states) is empty")]
    EmptyStates,

    /// Σ (the input alphabet) is empty.
    #[error("Σ (the input alphabet) is empty")]
    EmptyAlphabet,

    /// q0 is not a member of Q.
    #[error("initial state {0:?} is not a member of Q")]
    InvalidInitialState(StateId),

    /// F (the set of accepting states) is empty.
    #[error("F (the set of accepting states) is empty")]
    EmptyFinalStates,

    /// F is not a subset of Q.
    #[error("F (the set of accepting states) is not a subset of Q")]
    FinalStatesNotSubset,

    /// A δ row does not cover exactly the alphabet.
    #[error("δ does not cover the full alphabet for state {0:?}")]
    IncompleteAlphabetCoverage(StateId),

    /// The δ row keys do not cover exactly Q.
    #[error("δ rows do not cover exactly the states in Q")]
    IncompleteStateCoverage,
}
