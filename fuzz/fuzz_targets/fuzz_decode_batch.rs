//! Fuzz target: request decoding.
//!
//! Verifies that arbitrary byte sequences fed to `codec::decode` never cause
//! panics, UB, or unbounded resource consumption.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; panics are not.
    let _ = sortd_core::codec::decode(data);
});
