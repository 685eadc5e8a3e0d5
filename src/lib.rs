//! # forth-trace
//!
//! A self-contained toolchain for a minimal Forth. The compiler turns
//! a source string into the bytecode of a small two-stack virtual
//! machine; the machine is then single-stepped, and every step exposes
//! a snapshot of the current word's disassembly, the data stack, and
//! the return stack for a renderer to draw as one page of trace.
//! ```text
//! STEP 9
//! [double]
//! ->  87  STK 0
//!     88  ADD
//!     89  RET
//! ```
//!
//! The accepted word set is documented in the [_Words] manual module.

#[path = "doc/words.rs"]
#[allow(non_snake_case)]
pub mod _Words;

pub mod lang;
pub mod mach;
