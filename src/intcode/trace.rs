// SPDX-License-Identifier: 0BSD

//! Optional recording of executed instructions
//!
//! The original motivation is the `--verbose` flag of the day 2 and day 5
//! programs, but the trace is also how the tests assert step semantics:
//! which instruction ran, at what pointer, and what it stored.

use std::fmt::{self, Display};

use super::{Interpreter, OpCode, ParamMode};

/// The destination and value of a mutating instruction
#[derive(Debug, Clone, Copy)]
struct Stored {
    dest: i64,
    val: i64,
}

#[derive(Debug, Clone, Copy)]
enum TracedOp {
    Add((i64, i64), (i64, i64), Stored),
    Mul((i64, i64), (i64, i64), Stored),
    In(Stored),
    Out((i64, i64)),
    Halt,
}

#[derive(Debug, Clone)]
/// An opaque type containing information about what instruction was executed, which can be queried
/// with its various methods, or converted into a [String] using its [Display] impl.
pub struct TracedInstr {
    op: TracedOp,
    op_int: i64,
    instr_ptr: usize,
    modes: [ParamMode; 3],
    opcode: OpCode,
}

impl TracedInstr {
    /// Return the instruction pointer's position when the traced instruction was executed
    pub fn instr_ptr(&self) -> usize {
        self.instr_ptr
    }

    /// Return the actual integer of the traced instruction
    pub fn op_int(&self) -> i64 {
        self.op_int
    }

    /// Return the opcode of the traced instruction
    pub fn op_code(&self) -> OpCode {
        self.opcode
    }

    /// If the instruction stored a value, return that value
    pub fn stored_val(&self) -> Option<i64> {
        match self.op {
            TracedOp::Add(_, _, s) | TracedOp::Mul(_, _, s) | TracedOp::In(s) => Some(s.val),
            TracedOp::Out(_) | TracedOp::Halt => None,
        }
    }

    /// Return an array of the parameter modes of the traced instruction
    pub fn param_modes(&self) -> [ParamMode; 3] {
        self.modes
    }

    pub(super) fn build(
        op_int: i64,
        instr_ptr: usize,
        resolved_params: &[(i64, i64)],
        stored: Option<i64>,
    ) -> Self {
        let (opcode, modes) =
            Interpreter::parse_op(op_int).expect("previously parsed successfully");
        macro_rules! stored {
            ($dest: expr) => {
                Stored {
                    dest: $dest,
                    val: stored.expect("mutating instruction records its stored value"),
                }
            };
        }

        let op = match opcode {
            OpCode::Add => {
                debug_assert_eq!(resolved_params.len(), 3);
                TracedOp::Add(
                    resolved_params[0],
                    resolved_params[1],
                    stored!(resolved_params[2].1),
                )
            }
            OpCode::Mul => {
                debug_assert_eq!(resolved_params.len(), 3);
                TracedOp::Mul(
                    resolved_params[0],
                    resolved_params[1],
                    stored!(resolved_params[2].1),
                )
            }
            OpCode::In => {
                debug_assert_eq!(resolved_params.len(), 1);
                TracedOp::In(stored!(resolved_params[0].1))
            }
            OpCode::Out => {
                debug_assert_eq!(resolved_params.len(), 1);
                TracedOp::Out(resolved_params[0])
            }
            OpCode::Halt => {
                debug_assert_eq!(resolved_params.len(), 0);
                TracedOp::Halt
            }
        };
        Self {
            op,
            op_int,
            instr_ptr,
            modes,
            opcode,
        }
    }
}

impl Interpreter {
    /// Begin a [Trace] of executed instructions. If a trace is already running, this replaces that
    /// trace and returns it in a [`Some`], otherwise, it returns [`None`].
    ///
    /// # Example
    /// ```
    ///# use aoc2019::prelude::*;
    /// let mut interp = Interpreter::new([1101, 90, 9, 4, 99]);
    /// interp.start_trace();
    /// interp.run_through_inputs(empty()).unwrap();
    ///
    /// let trace = interp.end_trace().unwrap();
    /// assert_eq!(trace.0.len(), 2);
    /// assert_eq!(trace.0[0].stored_val(), Some(99));
    /// ```
    pub fn start_trace(&mut self) -> Option<Trace> {
        self.trace.replace(Trace::new())
    }

    /// Stop tracing executed instructions into a [Trace]. If no trace was active, returns [`None`]
    ///
    /// see [Interpreter::start_trace]
    pub fn end_trace(&mut self) -> Option<Trace> {
        self.trace.take()
    }

    /// Get a view of the current trace
    pub fn show_trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }
}

#[derive(Debug, Default, Clone)]
/// A log of instructions that an [Interpreter] has executed since a call to
/// [Interpreter::start_trace]
///
/// see [Interpreter::start_trace]
pub struct Trace(pub Vec<TracedInstr>);

impl Trace {
    pub(crate) fn push(
        &mut self,
        op_int: i64,
        instr_ptr: usize,
        resolved_params: &[(i64, i64)],
        stored: Option<i64>,
    ) {
        self.0
            .push(TracedInstr::build(op_int, instr_ptr, resolved_params, stored))
    }

    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }
}

impl Display for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ran instruction at {:0>4}: op int {: <5} | ",
            self.instr_ptr, self.op_int
        )?;

        match self.op {
            TracedOp::Add((pa, va), (pb, vb), stored)
            | TracedOp::Mul((pa, va), (pb, vb), stored) => {
                write!(
                    f,
                    "[{} {}{pa} (resolves to {va}), {}{pb} (resolves to {vb}), {} (stored {})]",
                    self.opcode, self.modes[0], self.modes[1], stored.dest, stored.val
                )
            }
            TracedOp::In(stored) => {
                write!(f, "[{} {} (stored {})]", self.opcode, stored.dest, stored.val)
            }
            TracedOp::Out((p, v)) => {
                write!(f, "[{} {}{p} (resolves to {v})]", self.opcode, self.modes[0])
            }
            TracedOp::Halt => {
                write!(f, "[HALT]")
            }
        }
    }
}
