//! Stateful machine runner bound to one automaton.
//!
//! A [`FiniteStateMachine`] holds a shared, read-only automaton plus its
//! own mutable cursor. Derive as many machines as needed from one
//! automaton; nothing is coordinated between them. A machine is meant
//! for a single run over one input; derive another for the next input.

mod convert;
mod error;
mod trace;

pub use convert::{decimal_suffix, OutputConverter};
pub use error::ExecutionError;
pub use trace::{RunTrace, TransitionRecord};

use crate::automaton::{FiniteAutomaton, StateId};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// A session over one automaton: current-state cursor, output converter
/// and the trace of transitions taken so far.
///
/// # Example
///
/// ```rust
/// use finite_automaton::binary_mod_automaton;
/// use std::sync::Arc;
///
/// let mod_three = Arc::new(binary_mod_automaton(3).unwrap());
///
/// let mut machine = Arc::clone(&mod_three).machine();
/// assert_eq!(machine.run("110").unwrap(), 0);
///
/// // A second machine over the same automaton starts fresh at q0.
/// let mut other = mod_three.machine();
/// assert_eq!(other.run("1101").unwrap(), 1);
/// ```
pub struct FiniteStateMachine {
    automaton: Arc<FiniteAutomaton>,
    current: StateId,
    converter: OutputConverter,
    trace: RunTrace,
}

impl FiniteStateMachine {
    /// Derive a machine positioned at the automaton's initial state,
    /// converting outputs with [`decimal_suffix`].
    pub fn new(automaton: Arc<FiniteAutomaton>) -> Self {
        Self::with_converter(automaton, Arc::new(decimal_suffix))
    }

    /// Derive a machine with an injected output converter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finite_automaton::{binary_mod_automaton, FiniteStateMachine};
    /// use std::sync::Arc;
    ///
    /// let mod_three = Arc::new(binary_mod_automaton(3).unwrap());
    /// let mut machine = FiniteStateMachine::with_converter(
    ///     mod_three,
    ///     Arc::new(|state: &str| Ok(state.len() as i64)),
    /// );
    ///
    /// assert_eq!(machine.run("110").unwrap(), 2); // "S0" has length 2
    /// ```
    pub fn with_converter(automaton: Arc<FiniteAutomaton>, converter: OutputConverter) -> Self {
        let current = automaton.initial().to_string();
        Self {
            automaton,
            current,
            converter,
            trace: RunTrace::new(),
        }
    }

    /// The automaton this machine is bound to.
    pub fn automaton(&self) -> &Arc<FiniteAutomaton> {
        &self.automaton
    }

    /// The current-state cursor.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// The transitions taken so far.
    pub fn trace(&self) -> &RunTrace {
        &self.trace
    }

    /// Consume one input symbol and advance the cursor.
    ///
    /// # Errors
    ///
    /// [`ExecutionError::UnacceptableSymbol`] when the symbol is outside
    /// Σ. [`ExecutionError::UndefinedTransition`] when the current state
    /// has no δ row, which is only reachable after following a
    /// transition target that escaped Q (targets are not validated at
    /// construction). After an error the run is abandoned; the cursor is
    /// not meaningful beyond that call.
    pub fn process_symbol(&mut self, symbol: char) -> Result<(), ExecutionError> {
        if !self.automaton.alphabet().contains(&symbol) {
            return Err(ExecutionError::UnacceptableSymbol { symbol });
        }
        let next = self
            .automaton
            .transition(&self.current, symbol)
            .ok_or_else(|| ExecutionError::UndefinedTransition {
                state: self.current.clone(),
            })?
            .to_string();

        self.trace = self.trace.record(TransitionRecord {
            from: self.current.clone(),
            symbol,
            to: next.clone(),
            timestamp: Utc::now(),
        });
        self.current = next;
        Ok(())
    }

    /// Feed the whole input and produce the machine's output.
    ///
    /// Symbols are consumed left to right; the first symbol error aborts
    /// the run. When all input is consumed the final state must be in F,
    /// after which the output converter maps it to the result.
    ///
    /// # Errors
    ///
    /// Any [`ExecutionError`] from [`process_symbol`](Self::process_symbol),
    /// [`ExecutionError::NonAcceptingFinalState`] when the end-of-input
    /// state is not in F, or [`ExecutionError::OutputConversion`]
    /// wrapping a converter failure.
    pub fn run(&mut self, input: &str) -> Result<i64, ExecutionError> {
        for symbol in input.chars() {
            self.process_symbol(symbol)?;
        }

        if !self.automaton.accepting().contains(&self.current) {
            return Err(ExecutionError::NonAcceptingFinalState {
                state: self.current.clone(),
                accepting: self.automaton.accepting().to_string(),
            });
        }

        (self.converter)(&self.current).map_err(|source| ExecutionError::OutputConversion {
            state: self.current.clone(),
            source,
        })
    }
}

impl fmt::Debug for FiniteStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteStateMachine")
            .field("automaton", &self.automaton)
            .field("current", &self.current)
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FiniteStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FSM:\n\tcurrent={}\n\tFA={}",
            self.current, self.automaton
        )
    }
}

/// One-shot entry point for thin wrappers: derive a machine from the
/// automaton, run the whole input, return the output.
///
/// # Example
///
/// ```rust
/// use finite_automaton::{binary_mod_automaton, compute_output};
/// use std::sync::Arc;
///
/// let mod_three = Arc::new(binary_mod_automaton(3).unwrap());
/// assert_eq!(compute_output(&mod_three, "1101").unwrap(), 1);
/// ```
pub fn compute_output(
    automaton: &Arc<FiniteAutomaton>,
    input: &str,
) -> Result<i64, ExecutionError> {
    let mut machine = FiniteStateMachine::new(Arc::clone(automaton));
    machine.run(input)
}
