#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for the `thread_hello` tests.

mod program_output;
mod watchdog;

pub use program_output::*;
pub use watchdog::*;
