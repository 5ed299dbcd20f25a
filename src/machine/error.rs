//! Execution errors for the machine runner.

use crate::automaton::StateId;
use thiserror::Error;

/// Errors raised while feeding input through a
/// [`FiniteStateMachine`](super::FiniteStateMachine).
///
/// All failures are deterministic for a given automaton and input;
/// nothing is retried and no partial output accompanies an error.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The input symbol is not a member of the alphabet Σ.
    #[error("symbol {symbol:?} is not an acceptable input")]
    UnacceptableSymbol { symbol: char },

    /// The current state has no δ row. Only reachable after following a
    /// transition target outside Q, which construction deliberately
    /// accepts.
    #[error("no transition row is defined for state {state:?}")]
    UndefinedTransition { state: StateId },

    /// End of input was reached in a state outside F.
    #[error("state {state:?} is not one of the accepting final states F={accepting}")]
    NonAcceptingFinalState { state: StateId, accepting: String },

    /// The output converter rejected the final state.
    #[error("could not convert final state {state:?} to an output")]
    OutputConversion {
        state: StateId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_piece() {
        let err = ExecutionError::UnacceptableSymbol { symbol: '2' };
        assert_eq!(err.to_string(), "symbol '2' is not an acceptable input");

        let err = ExecutionError::NonAcceptingFinalState {
            state: "S1".to_string(),
            accepting: "(S0, S2)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "state \"S1\" is not one of the accepting final states F=(S0, S2)"
        );
    }
}
