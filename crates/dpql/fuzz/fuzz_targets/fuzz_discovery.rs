//! Fuzz target for the discovery drivers.
//!
//! Splits the input into two flexible-parsed datasets and runs every
//! operation over them. No input may panic the engine.

#![no_main]

use libfuzzer_sys::fuzz_target;
use dpql::{discovery, Operation, Parser, ParserConfig, Snapshot};

fuzz_target!(|data: &[u8]| {
    if data.len() > 20_000 {
        return;
    }

    let parser = Parser::with_config(ParserConfig {
        flexible: true,
        ..ParserConfig::default()
    });

    let mid = data.len() / 2;
    let datasets: Vec<_> = [("left", &data[..mid]), ("right", &data[mid..])]
        .into_iter()
        .filter_map(|(name, bytes)| parser.parse_bytes(name, bytes).ok())
        .collect();

    let snapshot = Snapshot::from_datasets(datasets);
    for op in Operation::ALL {
        let _ = discovery::execute(op, &snapshot);
    }
});
