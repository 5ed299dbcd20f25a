//! The validated finite automaton five-tuple (Q, Σ, q0, F, δ).
//!
//! All structural validation happens once, in [`FiniteAutomaton::new`].
//! A constructed automaton is internally consistent, never mutated, and
//! safe to share read-only across any number of derived machines.

mod error;
pub mod modulo;

pub use error::ConstructionError;

use crate::machine::FiniteStateMachine;
use crate::set::Set;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Identifier of a single automaton state.
pub type StateId = String;

/// The transition function δ as a two-level table: state → symbol → next state.
pub type TransitionTable = HashMap<StateId, HashMap<char, StateId>>;

/// An immutable, validated deterministic finite automaton.
///
/// Holds the five-tuple (Q, Σ, q0, F, δ). Fields are private and only
/// readable through accessors, so the invariants checked at construction
/// hold for the automaton's whole lifetime:
///
/// - Q, Σ and F are non-empty
/// - q0 ∈ Q and F ⊆ Q
/// - δ is a total function over Q × Σ (every state has a row, every row
///   covers exactly the alphabet)
///
/// # Example
///
/// ```rust
/// use finite_automaton::{set, transitions, FiniteAutomaton};
///
/// let mod_three = FiniteAutomaton::new(
///     set!["S0", "S1", "S2"],
///     set!['0', '1'],
///     "S0",
///     set!["S0", "S1", "S2"],
///     transitions! {
///         "S0" => { '0' => "S0", '1' => "S1" },
///         "S1" => { '0' => "S2", '1' => "S0" },
///         "S2" => { '0' => "S1", '1' => "S2" },
///     },
/// )
/// .unwrap();
///
/// assert_eq!(mod_three.transition("S1", '0'), Some("S2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiniteAutomaton {
    states: Set<StateId>,
    alphabet: Set<char>,
    initial: StateId,
    accepting: Set<StateId>,
    delta: TransitionTable,
}

impl FiniteAutomaton {
    /// Validate and construct the five-tuple.
    ///
    /// Checks run in order and the first failure wins; no partial
    /// automaton is ever returned. Arguments are taken by value, so the
    /// caller cannot mutate the automaton's collections after
    /// construction (clone at the call site to keep a copy).
    ///
    /// Transition *targets* are deliberately not checked against Q. A
    /// stray target is accepted here and surfaces at run time as
    /// [`ExecutionError::UndefinedTransition`](crate::ExecutionError::UndefinedTransition)
    /// once its missing row is consulted.
    ///
    /// # Errors
    ///
    /// One [`ConstructionError`] per violated invariant, see the variant
    /// docs.
    pub fn new(
        states: Set<StateId>,
        alphabet: Set<char>,
        initial: impl Into<StateId>,
        accepting: Set<StateId>,
        delta: TransitionTable,
    ) -> Result<Self, ConstructionError> {
        let initial = initial.into();

        if states.is_empty() {
            return Err(ConstructionError::EmptyStates);
        }
        if alphabet.is_empty() {
            return Err(ConstructionError::EmptyAlphabet);
        }
        if !states.contains(&initial) {
            return Err(ConstructionError::InvalidInitialState(initial));
        }
        if accepting.is_empty() {
            return Err(ConstructionError::EmptyFinalStates);
        }
        if !accepting.is_subset(&states) {
            return Err(ConstructionError::FinalStatesNotSubset);
        }

        // Totality of δ: each row must cover exactly Σ, and the row keys
        // must cover exactly Q. Both are mutual-subset checks.
        let mut rows: Set<StateId> = Set::new();
        for (state, row) in &delta {
            rows.insert(state.clone());
            let symbols: Set<char> = row.keys().copied().collect();
            if !symbols.is_subset(&alphabet) || !alphabet.is_subset(&symbols) {
                return Err(ConstructionError::IncompleteAlphabetCoverage(state.clone()));
            }
        }
        if !rows.is_subset(&states) || !states.is_subset(&rows) {
            return Err(ConstructionError::IncompleteStateCoverage);
        }

        Ok(Self {
            states,
            alphabet,
            initial,
            accepting,
            delta,
        })
    }

    /// The set of states Q.
    pub fn states(&self) -> &Set<StateId> {
        &self.states
    }

    /// The input alphabet Σ.
    pub fn alphabet(&self) -> &Set<char> {
        &self.alphabet
    }

    /// The initial state q0.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// The set of accepting states F.
    pub fn accepting(&self) -> &Set<StateId> {
        &self.accepting
    }

    /// The transition table δ.
    pub fn delta(&self) -> &TransitionTable {
        &self.delta
    }

    /// Look up δ(from, symbol).
    ///
    /// Returns `None` when `from` has no row (only possible for a state
    /// outside Q, e.g. a stray transition target) or when `symbol` is
    /// outside Σ.
    pub fn transition(&self, from: &str, symbol: char) -> Option<&str> {
        self.delta.get(from)?.get(&symbol).map(String::as_str)
    }

    /// Derive a fresh machine bound to this automaton, positioned at q0
    /// and using the default output converter.
    ///
    /// Any number of machines may share one automaton; each owns its own
    /// cursor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finite_automaton::binary_mod_automaton;
    /// use std::sync::Arc;
    ///
    /// let mod_three = Arc::new(binary_mod_automaton(3).unwrap());
    /// let mut machine = Arc::clone(&mod_three).machine();
    ///
    /// assert_eq!(machine.run("110").unwrap(), 0);
    /// ```
    pub fn machine(self: Arc<Self>) -> FiniteStateMachine {
        FiniteStateMachine::new(self)
    }
}

impl Display for FiniteAutomaton {
    /// Render the five-tuple. δ rows are ordered lexicographically by
    /// state and then by symbol, so the output is stable across runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FA:")?;
        writeln!(f, "\tQ={}", self.states)?;
        writeln!(f, "\tΣ={}", self.alphabet)?;
        writeln!(f, "\tq0={}", self.initial)?;
        writeln!(f, "\tF={}", self.accepting)?;

        let mut states: Vec<&StateId> = self.delta.keys().collect();
        states.sort();
        write!(f, "\tδ=[")?;
        for (i, state) in states.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{state}:")?;
            let row = &self.delta[state.as_str()];
            let mut symbols: Vec<&char> = row.keys().collect();
            symbols.sort();
            for (j, symbol) in symbols.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, " {symbol}->{}", row[*symbol])?;
            }
        }
        writeln!(f, "]")
    }
}
