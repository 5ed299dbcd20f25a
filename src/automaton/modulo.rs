//! Binary mod-N automata.
//!
//! Feeding the binary digits of an integer, most significant bit first,
//! through one of these automata leaves the machine in state `Sr` where
//! `r` is the integer's remainder modulo N.

use super::{ConstructionError, FiniteAutomaton, TransitionTable};
use crate::set::Set;
use std::collections::HashMap;

/// Build the automaton computing `value mod modulus` over binary input.
///
/// States are `S0..S{modulus-1}`, every state is accepting, and reading
/// a bit `b` in state `Si` moves to `S((2i + b) mod modulus)` — the
/// running remainder of the digits consumed so far.
///
/// A `modulus` of zero produces an empty state set and fails validation
/// with [`ConstructionError::EmptyStates`].
///
/// # Example
///
/// ```rust
/// use finite_automaton::{binary_mod_automaton, compute_output};
/// use std::sync::Arc;
///
/// let mod_three = Arc::new(binary_mod_automaton(3).unwrap());
///
/// // 13 is 1101 in binary; 13 mod 3 == 1.
/// assert_eq!(compute_output(&mod_three, "1101").unwrap(), 1);
/// ```
pub fn binary_mod_automaton(modulus: u32) -> Result<FiniteAutomaton, ConstructionError> {
    let states: Set<String> = (0..modulus).map(|r| format!("S{r}")).collect();
    let alphabet: Set<char> = ['0', '1'].into();
    let accepting = states.clone();

    let mut delta = TransitionTable::new();
    for r in 0..modulus {
        let mut row = HashMap::new();
        row.insert('0', format!("S{}", (2 * r) % modulus));
        row.insert('1', format!("S{}", (2 * r + 1) % modulus));
        delta.insert(format!("S{r}"), row);
    }

    FiniteAutomaton::new(states, alphabet, "S0", accepting, delta)
}
