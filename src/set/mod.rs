//! Generic set container backing the automaton's five-tuple.
//!
//! A [`Set`] is an unordered collection of unique elements with the
//! operations the automaton layer needs: membership, subset tests,
//! deterministic textual rendering, and parsing of `(a,b,c)` literals.
//! It knows nothing about automata.

mod error;

pub use error::ParseError;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::Hash;

/// Unordered collection of unique elements.
///
/// Insertion order is irrelevant, uniqueness is enforced by the
/// representation, and the [`Display`] rendering is sorted so hash
/// iteration order never leaks into output.
///
/// # Example
///
/// ```rust
/// use finite_automaton::{set, Set};
///
/// let mut states: Set<String> = set!["S0", "S1"];
/// states.insert("S2".to_string());
/// states.insert("S2".to_string()); // idempotent
///
/// assert_eq!(states.len(), 3);
/// assert_eq!(states.to_string(), "(S0, S1, S2)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Set<T: Eq + Hash> {
    elements: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    /// Insert an element. Inserting an element that is already present
    /// leaves the set unchanged.
    pub fn insert(&mut self, value: T) {
        self.elements.insert(value);
    }

    /// Remove an element. Removing an absent element is a no-op.
    pub fn remove(&mut self, value: &T) {
        self.elements.remove(value);
    }

    /// Check whether an element is present.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check whether every element of `self` is also in `other`.
    ///
    /// Two sets are equivalent iff each is a subset of the other; with
    /// content-based `PartialEq` that equivalence is simply `==`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finite_automaton::{set, Set};
    ///
    /// let accepting: Set<String> = set!["S0", "S2"];
    /// let states: Set<String> = set!["S0", "S1", "S2"];
    ///
    /// assert!(accepting.is_subset(&states));
    /// assert!(!states.is_subset(&accepting));
    /// ```
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Iterate over the elements in unspecified order.
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Build a set from a literal of the form `(tok1,tok2,...)`.
    ///
    /// The input may carry whitespace around the parentheses and around
    /// each token; empty tokens (trailing commas, blank entries) are
    /// skipped. Each remaining token is passed through `convert`.
    ///
    /// # Errors
    ///
    /// [`ParseError::Format`] when the trimmed input is not wrapped in
    /// parentheses, [`ParseError::Conversion`] when `convert` rejects a
    /// token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finite_automaton::Set;
    /// use std::convert::Infallible;
    ///
    /// let states = Set::parse("( S0, S1 , S2 )", |tok| {
    ///     Ok::<_, Infallible>(tok.to_string())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(states.len(), 3);
    /// assert!(states.contains(&"S1".to_string()));
    /// ```
    pub fn parse<F, E>(input: &str, convert: F) -> Result<Self, ParseError>
    where
        F: Fn(&str) -> Result<T, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let inner = input
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseError::Format {
                input: input.to_string(),
            })?;

        let mut set = Self::new();
        for token in inner.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let value = convert(token).map_err(|source| ParseError::Conversion {
                token: token.to_string(),
                source: source.into(),
            })?;
            set.insert(value);
        }
        Ok(set)
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Eq + Hash + Display> Display for Set<T> {
    /// Render as `(e1, e2, ...)` sorted by each element's textual form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();
        rendered.sort();
        write!(f, "({})", rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn identity(token: &str) -> Result<String, Infallible> {
        Ok(token.to_string())
    }

    #[test]
    fn new_set_is_empty() {
        let set: Set<String> = Set::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set: Set<String> = crate::set!["S0", "S1", "S2"];
        set.insert("S2".to_string());
        assert_eq!(set.len(), 3);

        set.insert("S3".to_string());
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn remove_absent_element_is_noop() {
        let mut set: Set<String> = crate::set!["S0", "S1", "S2"];
        set.remove(&"S3".to_string());
        assert_eq!(set, crate::set!["S0", "S1", "S2"]);

        set.remove(&"S2".to_string());
        assert_eq!(set, crate::set!["S0", "S1"]);
    }

    #[test]
    fn contains_reports_membership() {
        let set: Set<char> = crate::set!['0', '1'];
        assert!(set.contains(&'0'));
        assert!(!set.contains(&'2'));
    }

    #[test]
    fn subset_in_both_directions_means_equivalence() {
        let forward: Set<String> = ["S0", "S1", "S2"].map(String::from).into();
        let backward: Set<String> = ["S2", "S1", "S0"].map(String::from).into();

        assert!(forward.is_subset(&backward));
        assert!(backward.is_subset(&forward));
        assert_eq!(forward, backward);
    }

    #[test]
    fn proper_subset_is_not_equal() {
        let small: Set<String> = crate::set!["S0"];
        let big: Set<String> = crate::set!["S0", "S1"];

        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert_ne!(small, big);
    }

    #[test]
    fn clone_is_independent() {
        let original: Set<String> = crate::set!["S0", "S1"];
        let mut copy = original.clone();
        copy.insert("S2".to_string());

        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn display_sorts_elements() {
        let set: Set<String> = crate::set!["S2", "S0", "S1"];
        assert_eq!(set.to_string(), "(S0, S1, S2)");

        let empty: Set<String> = Set::new();
        assert_eq!(empty.to_string(), "()");
    }

    #[test]
    fn parse_accepts_wrapped_tokens() {
        let set = Set::parse("(S0,S1,S2)", identity).unwrap();
        assert_eq!(set, crate::set!["S0", "S1", "S2"]);
    }

    #[test]
    fn parse_trims_whitespace() {
        let set = Set::parse("  ( S0 , S1 )  ", identity).unwrap();
        assert_eq!(set, crate::set!["S0", "S1"]);
    }

    #[test]
    fn parse_skips_empty_tokens() {
        let set = Set::parse("(S0,,S1,)", identity).unwrap();
        assert_eq!(set, crate::set!["S0", "S1"]);

        let empty = Set::parse("()", identity).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn parse_without_parentheses_is_a_format_error() {
        let result = Set::parse("S0,S1,S2", identity);
        assert!(matches!(result, Err(ParseError::Format { .. })));

        let half_open = Set::parse("(S0,S1,S2", identity);
        assert!(matches!(half_open, Err(ParseError::Format { .. })));
    }

    #[test]
    fn parse_surfaces_conversion_failures() {
        let result: Result<Set<u32>, _> = Set::parse("(1,two,3)", |tok| tok.parse::<u32>());
        match result {
            Err(ParseError::Conversion { token, .. }) => assert_eq!(token, "two"),
            other => panic!("expected a conversion error, got {other:?}"),
        }
    }

    #[test]
    fn set_roundtrips_through_serde() {
        let set: Set<String> = crate::set!["S0", "S1", "S2"];
        let json = serde_json::to_string(&set).unwrap();
        let back: Set<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);
    }
}
