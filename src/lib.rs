//! A validated deterministic finite automaton with a derived state
//! machine runner.
//!
//! The crate is built bottom-up in three layers:
//!
//! - **[`Set`]**: an unordered collection of unique elements with
//!   subset tests, deterministic rendering and a `(a,b,c)` literal
//!   parser. Leaf dependency; knows nothing about automata.
//! - **[`FiniteAutomaton`]**: the immutable five-tuple (Q, Σ, q0, F, δ),
//!   validated once at construction and never re-checked.
//! - **[`FiniteStateMachine`]**: a session bound to one shared
//!   automaton, advancing a current-state cursor one symbol at a time
//!   and converting the final accepting state into an integer output.
//!
//! The illustrative use case is computing `value mod N` by feeding the
//! binary digits of an integer through an automaton whose states
//! represent remainders; [`binary_mod_automaton`] builds those automata.
//!
//! # Example
//!
//! ```rust
//! use finite_automaton::{binary_mod_automaton, compute_output};
//! use std::sync::Arc;
//!
//! let mod_three = Arc::new(binary_mod_automaton(3).unwrap());
//!
//! // 6 is 110 in binary; 6 mod 3 == 0.
//! assert_eq!(compute_output(&mod_three, "110").unwrap(), 0);
//!
//! // '2' is not in the alphabet.
//! assert!(compute_output(&mod_three, "112").is_err());
//! ```

pub mod automaton;
pub mod machine;
mod macros;
pub mod set;

// Re-export commonly used types
pub use automaton::modulo::binary_mod_automaton;
pub use automaton::{ConstructionError, FiniteAutomaton, StateId, TransitionTable};
pub use machine::{
    compute_output, decimal_suffix, ExecutionError, FiniteStateMachine, OutputConverter, RunTrace,
    TransitionRecord,
};
pub use set::{ParseError, Set};
