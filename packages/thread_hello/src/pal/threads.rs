// Thread creation abstraction for thread_hello.
//
// Lets tests refuse a thread at a chosen rank or hold workers back until a condition holds.

mod abstractions;
mod facade;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
pub(crate) use real::*;
