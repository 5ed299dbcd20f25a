//! Mod-Three over binary input
//!
//! The classic illustration: feed the binary digits of an integer
//! through the three-state remainder automaton and read back
//! `value mod 3` from the accepting state.
//!
//! Run with: cargo run --example mod_three -- 1101

use finite_automaton::{binary_mod_automaton, compute_output};
use std::process;
use std::sync::Arc;

fn main() {
    let Some(input) = std::env::args().nth(1) else {
        eprintln!("Usage: mod_three <binary-digits>");
        process::exit(1);
    };

    let mod_three = match binary_mod_automaton(3) {
        Ok(fa) => Arc::new(fa),
        Err(err) => {
            eprintln!("Error building the mod-three automaton: {err}");
            process::exit(1);
        }
    };

    match compute_output(&mod_three, &input) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error running the machine: {err}");
            process::exit(1);
        }
    }
}
