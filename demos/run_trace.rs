//! Run Trace Inspection
//!
//! This example demonstrates:
//! - Building an automaton by hand with the `set!` and `transitions!` macros
//! - Walking a machine symbol by symbol
//! - Reading the trace back after a run
//! - Injecting a custom output converter
//!
//! Run with: cargo run --example run_trace

use finite_automaton::{set, transitions, FiniteAutomaton, FiniteStateMachine};
use std::sync::Arc;

fn main() {
    println!("=== Run Trace Inspection ===\n");

    let mod_three = Arc::new(
        FiniteAutomaton::new(
            set!["S0", "S1", "S2"],
            set!['0', '1'],
            "S0",
            set!["S0", "S1", "S2"],
            transitions! {
                "S0" => { '0' => "S0", '1' => "S1" },
                "S1" => { '0' => "S2", '1' => "S0" },
                "S2" => { '0' => "S1", '1' => "S2" },
            },
        )
        .expect("the mod-three tuple is well formed"),
    );

    println!("{mod_three}");

    let input = "1101"; // 13 in binary
    let mut machine = Arc::clone(&mod_three).machine();
    println!("Feeding {input:?} one symbol at a time:");
    for symbol in input.chars() {
        machine
            .process_symbol(symbol)
            .expect("all symbols are in the alphabet");
        println!("  {symbol} -> {}", machine.current_state());
    }

    println!("\nTrace:");
    for record in machine.trace().records() {
        println!("  {} --{}--> {}", record.from, record.symbol, record.to);
    }
    let path: Vec<&str> = machine.trace().path().iter().map(|s| s.as_str()).collect();
    println!("Path: {}", path.join(" -> "));

    // A converter that reports the remainder as a percentage of the modulus.
    let mut scaled = FiniteStateMachine::with_converter(
        mod_three,
        Arc::new(|state: &str| {
            let digits = state.strip_prefix('S').ok_or("state is not S-prefixed")?;
            let remainder: i64 = digits.parse()?;
            Ok(remainder * 100 / 3)
        }),
    );
    println!(
        "\nWith a custom converter, {input:?} yields {}",
        scaled.run(input).expect("the run is valid")
    );

    println!("\n=== Example Complete ===");
}
