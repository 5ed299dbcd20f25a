//! Macros for literal construction of sets and transition tables.

/// Build a [`Set`](crate::Set) from a list of elements.
///
/// Elements are passed through [`Into`], so `&str` literals can build a
/// `Set<String>` directly.
///
/// # Example
///
/// ```
/// use finite_automaton::{set, Set};
///
/// let states: Set<String> = set!["S0", "S1", "S2"];
/// let alphabet: Set<char> = set!['0', '1'];
///
/// assert_eq!(states.len(), 3);
/// assert!(alphabet.contains(&'1'));
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut set = $crate::Set::new();
        $(set.insert($elem.into());)+
        set
    }};
}

/// Build a [`TransitionTable`](crate::TransitionTable) from nested
/// `state => { symbol => target }` rows.
///
/// # Example
///
/// ```
/// use finite_automaton::transitions;
///
/// let delta = transitions! {
///     "S0" => { '0' => "S0", '1' => "S1" },
///     "S1" => { '0' => "S0", '1' => "S1" },
/// };
///
/// assert_eq!(delta["S0"][&'1'], "S1");
/// ```
#[macro_export]
macro_rules! transitions {
    ($($state:expr => { $($symbol:expr => $target:expr),+ $(,)? }),* $(,)?) => {{
        let mut table = $crate::TransitionTable::new();
        $(
            let mut row = ::std::collections::HashMap::new();
            $(row.insert($symbol, ::std::string::String::from($target));)+
            table.insert(::std::string::String::from($state), row);
        )*
        table
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Set, TransitionTable};

    #[test]
    fn set_macro_builds_owned_elements() {
        let states: Set<String> = set!["S0", "S1"];
        assert_eq!(states.len(), 2);
        assert!(states.contains(&"S0".to_string()));

        let empty: Set<String> = set![];
        assert!(empty.is_empty());
    }

    #[test]
    fn set_macro_deduplicates() {
        let states: Set<String> = set!["S0", "S0", "S1"];
        assert_eq!(states.len(), 2);
    }

    #[test]
    fn transitions_macro_builds_nested_rows() {
        let delta: TransitionTable = transitions! {
            "S0" => { '0' => "S0", '1' => "S1" },
            "S1" => { '0' => "S2", '1' => "S0" },
            "S2" => { '0' => "S1", '1' => "S2" },
        };

        assert_eq!(delta.len(), 3);
        assert_eq!(delta["S1"][&'0'], "S2");
        assert_eq!(delta["S2"][&'1'], "S2");
    }
}
