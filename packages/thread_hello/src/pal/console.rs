// Console abstraction for thread_hello.
//
// Provides a mockable interface over the two output streams the program writes to.

mod abstractions;
mod facade;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
pub(crate) use real::*;
