// SPDX-License-Identifier: 0BSD

//! The Intcode virtual machine used by days 2 and 5
//!
//! An Intcode program is its own memory: a flat array of integers, loaded
//! from comma-separated text with [parse_program]. The [Interpreter] executes
//! the five opcodes defined through [Day 5] (add, multiply, input, output,
//! halt) with positional and immediate parameter modes. Memory is fixed-size;
//! any access outside the loaded program is an error.
//!
//! # Example
//!
//! ```rust
//! use aoc2019::prelude::*;
//!
//! // echo: read one input, write it back out, halt
//! let mut interpreter = Interpreter::new(vec![3, 0, 4, 0, 99]);
//! assert_eq!(
//!     interpreter.run_through_inputs([42]).unwrap(),
//!     (vec![42], State::Halted)
//! );
//! ```
//!
//! [Day 5]: https://adventofcode.com/2019/day/5

pub mod trace;

use std::error::Error;
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::ops::{Index, IndexMut};

use trace::Trace;

/// The state of the intcode system, returned whenever the intcode system has stopped.
///
/// [Awaiting](State::Awaiting) means that there are more instructions to execute, but all input
/// has been consumed and the next instruction requires input.
///
/// [Halted](State::Halted) means that a `HALT` instruction has been executed. Once it's been
/// returned, no more instructions will be executed.
#[derive(Debug, PartialEq)]
pub enum State {
    /// Execution is awaiting input
    Awaiting,
    /// Execution has halted
    Halted,
}

#[derive(Debug, PartialEq)]
/// An error occured when executing an intcode instruction
pub enum InterpreterError {
    /// An invalid opcode was encountered
    UnrecognizedOpcode(i64),
    /// An unknown parameter mode was encountered
    UnknownMode(i64),
    /// A memory address was negative or past the end of memory
    AddressOutOfRange(i64),
    /// An instruction tried to write to an immediate destination
    WriteToImmediate(i64),
}

impl Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpreterError::UnrecognizedOpcode(n) => {
                write!(f, "encountered unrecognized opcode {n}")
            }
            InterpreterError::UnknownMode(mode) => {
                write!(f, "encountered unknown parameter mode {mode}")
            }
            InterpreterError::AddressOutOfRange(i) => {
                write!(f, "address {i} is outside of program memory")
            }
            InterpreterError::WriteToImmediate(i) => {
                write!(f, "code attempted to write to immediate {i}")
            }
        }
    }
}

impl Error for InterpreterError {}

/// Parameter mode for Intcode instruction
///
/// Intcode instruction parameters each have a mode: [positional] or [immediate].
///
/// When executing an intcode instruction, the instruction's parameters are interpreted in
/// accordance with their associated modes.
///
/// [positional]: ParamMode::Positional
/// [immediate]: ParamMode::Immediate
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum ParamMode {
    /// Positional Mode
    ///
    /// A parameter in positional mode evaluates to the value at the address specified by the
    /// parameter.
    Positional = 0,
    /// Immediate Mode
    ///
    /// A parameter in immediate mode evaluates directly to the value specified. Instructions which
    /// write to memory may not use immediate mode for their destinations.
    #[doc(alias = "#")]
    Immediate = 1,
}

impl Display for ParamMode {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamMode::Positional => Ok(()),
            ParamMode::Immediate => write!(fmt, "#"),
        }
    }
}

impl TryFrom<i64> for ParamMode {
    type Error = InterpreterError;
    fn try_from(i: i64) -> Result<Self, Self::Error> {
        match i {
            0 => Ok(ParamMode::Positional),
            1 => Ok(ParamMode::Immediate),
            _ => Err(Self::Error::UnknownMode(i)),
        }
    }
}

/// The operation encoded in the two low digits of an instruction
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OpCode {
    /// Add two parameters, store at the third
    Add = 1,
    /// Multiply two parameters, store at the third
    Mul = 2,
    /// Store the next pending input at the parameter
    In = 3,
    /// Output the value of the parameter
    Out = 4,
    /// Stop execution
    Halt = 99,
}

impl Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::Add => write!(f, "ADD"),
            OpCode::Mul => write!(f, "MUL"),
            OpCode::In => write!(f, "IN"),
            OpCode::Out => write!(f, "OUT"),
            OpCode::Halt => write!(f, "HALT"),
        }
    }
}

/// Parse the comma-separated text of an intcode program into its starting memory.
///
/// ```rust
/// use aoc2019::intcode::parse_program;
/// assert_eq!(parse_program("1,0,0,0,99\n").unwrap(), vec![1, 0, 0, 0, 99]);
/// ```
pub fn parse_program(text: &str) -> Result<Vec<i64>, ParseIntError> {
    text.trim().split(',').map(|s| s.trim().parse()).collect()
}

#[derive(Debug, Clone)]
/// An intcode interpreter, which provides optional [tracing](trace) of executed instructions.
pub struct Interpreter {
    index: usize,
    code: Vec<i64>,
    trace: Option<Trace>,
}

// ignore the trace field
impl PartialEq for Interpreter {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.code == other.code
    }
}

impl Index<usize> for Interpreter {
    type Output = i64;

    fn index(&self, i: usize) -> &Self::Output {
        self.code.index(i)
    }
}

impl IndexMut<usize> for Interpreter {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        self.code.index_mut(i)
    }
}

impl Interpreter {
    /// Create a new interpreter. Collects `code` into the starting memory state.
    pub fn new(code: impl IntoIterator<Item = i64>) -> Self {
        Self {
            index: 0,
            trace: None,
            code: code.into_iter().collect(),
        }
    }

    /// View the whole of program memory
    pub fn memory(&self) -> &[i64] {
        &self.code
    }

    /// Read the instruction or parameter at `addr`
    fn fetch(&self, addr: usize) -> Result<i64, InterpreterError> {
        self.code
            .get(addr)
            .copied()
            .ok_or(InterpreterError::AddressOutOfRange(addr as i64))
    }

    /// Read the memory cell a raw parameter points to
    fn deref(&self, raw: i64) -> Result<i64, InterpreterError> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| self.code.get(i).copied())
            .ok_or(InterpreterError::AddressOutOfRange(raw))
    }

    fn param_val(&self, raw: i64, mode: ParamMode) -> Result<i64, InterpreterError> {
        match mode {
            ParamMode::Positional => self.deref(raw),
            ParamMode::Immediate => Ok(raw),
        }
    }

    /// Resolve a raw destination parameter to a writable address
    fn dest_addr(&self, raw: i64, mode: ParamMode) -> Result<usize, InterpreterError> {
        if mode == ParamMode::Immediate {
            return Err(InterpreterError::WriteToImmediate(raw));
        }
        match usize::try_from(raw) {
            Ok(i) if i < self.code.len() => Ok(i),
            _ => Err(InterpreterError::AddressOutOfRange(raw)),
        }
    }

    pub(crate) fn parse_op(op: i64) -> Result<(OpCode, [ParamMode; 3]), InterpreterError> {
        let modes: [ParamMode; 3] = [
            ((op / 100) % 10).try_into()?,  // C (hundreds place)
            ((op / 1000) % 10).try_into()?, // B (thousands place)
            (op / 10000).try_into()?,       // A (ten thousands place)
        ];
        match op % 100 {
            1 => Ok((OpCode::Add, modes)),
            2 => Ok((OpCode::Mul, modes)),
            3 => Ok((OpCode::In, modes)),
            4 => Ok((OpCode::Out, modes)),
            99 => Ok((OpCode::Halt, modes)),
            other => Err(InterpreterError::UnrecognizedOpcode(other)),
        }
    }

    fn exec_instruction(
        &mut self,
        input: &mut Option<i64>,
        outputs: &mut Vec<i64>,
    ) -> Result<Option<State>, InterpreterError> {
        // Given a 5 digit number, digits ABCDE are used as follows:
        // DE is the two-digit opcode
        // C is the 1st parameter's mode
        // B is the 2nd parameter's mode
        // A is the 3rd parameter's mode
        //
        // So 01002 would be parsed as follows:
        //
        // Opcode 02 is multiply
        // C=0: 1st parameter is in positional mode
        // B=1: 2nd parameter is in immediate mode
        // A=0: 3rd parameter is in positional mode

        let instruction = self.fetch(self.index)?;
        let (opcode, modes) = Self::parse_op(instruction)?;

        macro_rules! record {
            ($params: expr, $stored: expr) => {
                if let Some(trace) = self.trace.as_mut() {
                    trace.push(instruction, self.index, $params, $stored);
                }
            };
        }

        match opcode {
            OpCode::Add | OpCode::Mul => {
                let raw_a = self.fetch(self.index + 1)?;
                let raw_b = self.fetch(self.index + 2)?;
                let raw_dest = self.fetch(self.index + 3)?;
                let a = self.param_val(raw_a, modes[0])?;
                let b = self.param_val(raw_b, modes[1])?;
                let dest = self.dest_addr(raw_dest, modes[2])?;
                let val = if opcode == OpCode::Add { a + b } else { a * b };
                record!(
                    &[(raw_a, a), (raw_b, b), (raw_dest, dest as i64)],
                    Some(val)
                );
                self.code[dest] = val;
                self.index += 4;
                Ok(None)
            }
            OpCode::In => {
                // stop *before* executing, so a later call can resume here
                let Some(input) = input.take() else {
                    return Ok(Some(State::Awaiting));
                };
                let raw_dest = self.fetch(self.index + 1)?;
                let dest = self.dest_addr(raw_dest, modes[0])?;
                record!(&[(raw_dest, dest as i64)], Some(input));
                self.code[dest] = input;
                self.index += 2;
                Ok(None)
            }
            OpCode::Out => {
                let raw = self.fetch(self.index + 1)?;
                let val = self.param_val(raw, modes[0])?;
                record!(&[(raw, val)], None);
                outputs.push(val);
                self.index += 2;
                Ok(None)
            }
            OpCode::Halt => {
                record!(&[], None);
                Ok(Some(State::Halted))
            }
        }
    }

    /// Execute until either the program halts, or it tries to read nonexistent input.
    /// Returns `Ok((v, s))`, where `v` is a [`Vec<i64>`] containing all outputs the program
    /// produced, and `s` is the [`State`] at the time it stopped.
    ///
    /// On error, it will return an [`InterpreterError`] that reflects the error.
    pub fn run_through_inputs(
        &mut self,
        inputs: impl IntoIterator<Item = i64>,
    ) -> Result<(Vec<i64>, State), InterpreterError> {
        let mut outputs = Vec::new();
        let mut inputs = inputs.into_iter();
        let mut current_input = None;
        loop {
            if current_input.is_none() {
                current_input = inputs.next();
            }
            match self.exec_instruction(&mut current_input, &mut outputs) {
                Ok(None) => (),
                Ok(Some(State::Halted)) => break Ok((outputs, State::Halted)),
                Ok(Some(State::Awaiting)) => break Ok((outputs, State::Awaiting)),
                Err(e) => break Err(e),
            }
        }
    }
}
