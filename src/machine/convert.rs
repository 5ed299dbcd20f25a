//! Output conversion from accepting states to integer results.

use std::error::Error;
use std::sync::Arc;

/// Strategy mapping a final state identifier to the caller-visible
/// output. Injected at machine derivation via
/// [`FiniteStateMachine::with_converter`](super::FiniteStateMachine::with_converter);
/// failures are surfaced as
/// [`ExecutionError::OutputConversion`](super::ExecutionError::OutputConversion).
pub type OutputConverter =
    Arc<dyn Fn(&str) -> Result<i64, Box<dyn Error + Send + Sync>> + Send + Sync>;

/// The default output converter.
///
/// Expects state identifiers shaped like `S<decimal>` and returns the
/// decimal value. A missing `S` prefix is tolerated (the whole
/// identifier is parsed); anything non-numeric after stripping fails.
///
/// # Example
///
/// ```rust
/// use finite_automaton::decimal_suffix;
///
/// assert_eq!(decimal_suffix("S2").unwrap(), 2);
/// assert_eq!(decimal_suffix("41").unwrap(), 41);
/// assert!(decimal_suffix("F0").is_err());
/// ```
pub fn decimal_suffix(state: &str) -> Result<i64, Box<dyn Error + Send + Sync>> {
    let digits = state.strip_prefix('S').unwrap_or(state);
    Ok(digits.parse::<i64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_states_parse_to_their_suffix() {
        assert_eq!(decimal_suffix("S0").unwrap(), 0);
        assert_eq!(decimal_suffix("S1").unwrap(), 1);
        assert_eq!(decimal_suffix("S12").unwrap(), 12);
    }

    #[test]
    fn bare_numbers_parse_whole() {
        assert_eq!(decimal_suffix("7").unwrap(), 7);
    }

    #[test]
    fn non_decimal_suffixes_fail() {
        assert!(decimal_suffix("F0").is_err());
        assert!(decimal_suffix("S").is_err());
        assert!(decimal_suffix("Sx").is_err());
        assert!(decimal_suffix("").is_err());
    }
}
