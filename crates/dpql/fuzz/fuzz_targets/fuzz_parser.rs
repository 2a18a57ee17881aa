//! Fuzz target for CSV/TSV ingestion.
//!
//! The parser must never panic on malformed input, whatever the delimiter
//! detection decides.

#![no_main]

use libfuzzer_sys::fuzz_target;
use dpql::Parser;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let _ = Parser::new().parse_bytes("fuzz", data);
});
