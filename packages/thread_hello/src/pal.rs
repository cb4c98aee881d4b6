// Platform abstraction layer for thread_hello.
//
// Console writes and thread creation go through traits so that tests can capture output and
// control when threads start. The layering is abstraction (trait) -> facade (enum) -> real
// implementation.

mod console;
mod threads;

pub(crate) use console::*;
pub(crate) use threads::*;
