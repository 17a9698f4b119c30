//! Fuzz target: console intent parser + supervisor
//!
//! Splits arbitrary input into lines, parses each as an operator intent
//! and applies the accepted ones.  The parser must never panic and no
//! applied sequence may break the link or motion interlocks.
//!
//! cargo fuzz run fuzz_intent_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use wheelchair::app::commands::Intent;
use wheelchair::app::service::ControlSupervisor;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut sup = ControlSupervisor::default();
    for line in text.lines() {
        let Ok(intent) = line.parse::<Intent>() else {
            continue;
        };
        sup.apply(intent);
        assert!(sup.current_state().is_consistent(), "interlock broken after {intent}");
    }
});
