// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Library backing solutions to the first six puzzles of Advent of Code 2019
//!
//! Each puzzle's logic lives in its own module so that the `day_NN` programs
//! under `src/bin/` stay thin and the tests can drive the logic directly. The
//! core of the repository is the [intcode] module, a five-opcode interpreter
//! used by days 2 and 5.
//!
//! # Example
//!
//! ```rust
//! use aoc2019::prelude::*;
//! let mut interpreter = Interpreter::new(vec![104, 7, 99]);
//!
//! assert_eq!(
//!     interpreter.run_through_inputs(empty()).unwrap(),
//!     (vec![7], State::Halted)
//! );
//! ```

pub mod fuel;
pub mod intcode;
pub mod orbits;
pub mod password;
pub mod wires;

/// A small module that re-exports items needed when working with the Intcode interpreter
pub mod prelude {
    pub use crate::intcode::{Interpreter, State};
    pub use std::iter::empty;
}
