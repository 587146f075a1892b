//! Test that examples from Advent of Code problem descriptions behave as described.
// SPDX-License-Identifier: 0BSD

use aoc2019::intcode::trace::{Trace, TracedInstr};
use aoc2019::intcode::{InterpreterError, ParamMode};
use aoc2019::prelude::*;
use either::Either;
use itertools::Itertools;

// first, some groundwork for common elements of different tests

/// Construct a new interpreter with the given starting code
macro_rules! interp {
    [$($i:expr),*] => {{
        Interpreter::new([$($i),*])
    }}
}

/// Run an interpreter to end, returning its output.
/// Borrows the interpreter in case its trace is useful
fn run_to_end(
    interp: &mut Interpreter,
    inputs: impl IntoIterator<Item = i64>,
) -> Result<Vec<i64>, Either<InterpreterError, Awaiting>> {
    let (output, state) = interp.run_through_inputs(inputs).map_err(Either::Left)?;
    if state == State::Halted {
        Ok(output)
    } else {
        Err(Either::Right(Awaiting { output }))
    }
}

/// A struct with the information about an expected traced instruction
struct ExpectedOp {
    op_int: i64,
    instr_ptr: usize,
    stored_val: Option<i64>,
}

impl ExpectedOp {
    const fn new(op_int: i64, instr_ptr: usize, stored_val: Option<i64>) -> Self {
        Self {
            op_int,
            instr_ptr,
            stored_val,
        }
    }

    fn validate(self, traced: &TracedInstr) {
        assert_eq!(self.op_int, traced.op_int());
        assert_eq!(self.instr_ptr, traced.instr_ptr());
        assert_eq!(self.stored_val, traced.stored_val());
    }
}

fn validate_trace(expected: impl IntoIterator<Item = ExpectedOp>, Trace(trace): Trace) {
    expected
        .into_iter()
        .zip_eq(trace)
        .for_each(|(op, instr)| op.validate(&instr))
}

mod day1_examples {
    use aoc2019::fuel::{fuel_for_mass, total_fuel_for_mass};

    mod part1 {
        use super::*;

        #[test]
        fn listed_masses() {
            assert_eq!(fuel_for_mass(12), 2);
            assert_eq!(fuel_for_mass(14), 2);
            assert_eq!(fuel_for_mass(1969), 654);
            assert_eq!(fuel_for_mass(100756), 33583);
        }
    }

    mod part2 {
        use super::*;

        #[test]
        fn listed_masses() {
            assert_eq!(total_fuel_for_mass(14), 2);
            assert_eq!(total_fuel_for_mass(1969), 966);
            assert_eq!(total_fuel_for_mass(100756), 50346);
        }
    }
}

mod day2_examples {
    mod part1 {
        use crate::*;

        /// the extended example used to help illustrate the basics
        #[test]
        fn extended_example() {
            let mut interp = interp![1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50];
            interp.start_trace();
            let output = run_to_end(&mut interp, empty()).unwrap();
            assert!(output.is_empty());
            const EXPECTED: [ExpectedOp; 3] = [
                ExpectedOp::new(1, 0, Some(70)),
                ExpectedOp::new(2, 4, Some(3500)),
                ExpectedOp::new(99, 8, None),
            ];
            validate_trace(EXPECTED, interp.end_trace().unwrap());
            assert_eq!(interp[0], 3500);
        }

        /// the extra, smaller examples that are listed after the extended example
        #[test]
        fn small_examples() {
            macro_rules! example {
            ($($code: literal),+ becomes $($output: literal),+) => {{
                let mut interp = interp![$($code),*];
                run_to_end(&mut interp, []).unwrap();
                for (i, val) in [$($output),+].into_iter().enumerate() {
                    assert_eq!(interp[i], val);
                }
            }}
        }
            example!(1,0,0,0,99 becomes 2,0,0,0,99);
            example!(2,3,0,3,99 becomes 2,3,0,6,99);
            example!(2,4,4,5,99,0 becomes 2,4,4,5,99,9801);
            example!(1,1,1,4,99,5,6,0,99 becomes 30,1,1,4,2,5,6,0,99);
        }
    }
}

mod day5_examples {
    mod part1 {
        use crate::*;

        #[test]
        fn echo_input() {
            let template = interp![3, 0, 4, 0, 99];
            for i in -128..128 {
                assert_eq!(run_to_end(&mut template.clone(), [i]).unwrap(), vec![i]);
            }
        }

        #[test]
        fn immediate_mode_example() {
            let mut interp = interp![1002, 4, 3, 4, 33];
            interp.start_trace();
            let output = run_to_end(&mut interp, []).unwrap();
            assert!(output.is_empty());
            const EXPECTED: [ExpectedOp; 2] = [
                ExpectedOp::new(1002, 0, Some(99)),
                ExpectedOp::new(99, 4, None),
            ];
            let trace = interp.end_trace().unwrap();
            assert_eq!(
                trace.0[0].param_modes(),
                [
                    ParamMode::Positional,
                    ParamMode::Immediate,
                    ParamMode::Positional
                ]
            );
            validate_trace(EXPECTED, trace);
        }

        /// > integers can be negative
        #[test]
        fn negative_immediate_example() {
            let mut interp = interp![1101, 100, -1, 4, 0];
            interp.start_trace();
            run_to_end(&mut interp, []).unwrap();
            const EXPECTED: [ExpectedOp; 2] = [
                ExpectedOp::new(1101, 0, Some(99)),
                ExpectedOp::new(99, 4, None),
            ];
            validate_trace(EXPECTED, interp.end_trace().unwrap());
        }

        /// an output parameter in immediate mode yields the literal, not a
        /// memory cell
        #[test]
        fn output_honors_parameter_mode() {
            assert_eq!(run_to_end(&mut interp![104, 7, 99], []).unwrap(), vec![7]);
            assert_eq!(run_to_end(&mut interp![4, 0, 99], []).unwrap(), vec![4]);
        }

        #[test]
        fn unrecognized_opcode_is_an_error() {
            assert_eq!(
                run_to_end(&mut interp![42, 0, 0, 0], []).unwrap_err(),
                Either::Left(InterpreterError::UnrecognizedOpcode(42))
            );
        }

        #[test]
        fn unknown_mode_is_an_error() {
            assert_eq!(
                run_to_end(&mut interp![904, 0, 99], []).unwrap_err(),
                Either::Left(InterpreterError::UnknownMode(9))
            );
        }

        /// a read with no pending input stops the machine without touching it,
        /// and it can resume
        #[test]
        fn input_underrun_is_resumable() {
            let mut interp = interp![3, 0, 4, 0, 99];
            assert!(matches!(
                run_to_end(&mut interp, []),
                Err(Either::Right(_))
            ));
            assert_eq!(run_to_end(&mut interp, [9]).unwrap(), vec![9]);
        }
    }
}

mod day3_examples {
    use aoc2019::wires::{closest_crossing_distance, fewest_combined_steps};

    mod part1 {
        use super::*;

        #[test]
        fn first_listed_pair() {
            assert_eq!(
                closest_crossing_distance([
                    "R75,D30,R83,U83,L12,D49,R71,U7,L72",
                    "U62,R66,U55,R34,D71,R55,D58,R83",
                ]),
                Some(159)
            );
        }

        #[test]
        fn second_listed_pair() {
            assert_eq!(
                closest_crossing_distance([
                    "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51",
                    "U98,R91,D20,R16,D67,R40,U7,R15,U6,R7",
                ]),
                Some(135)
            );
        }

        /// the illustrated example crosses at (3,3) and (6,5); (3,3) wins
        #[test]
        fn illustrated_example() {
            assert_eq!(
                closest_crossing_distance(["R8,U5,L5,D3", "U7,R6,D4,L4"]),
                Some(6)
            );
        }
    }

    mod part2 {
        use super::*;

        #[test]
        fn first_listed_pair() {
            assert_eq!(
                fewest_combined_steps([
                    "R75,D30,R83,U83,L12,D49,R71,U7,L72",
                    "U62,R66,U55,R34,D71,R55,D58,R83",
                ]),
                Some(610)
            );
        }

        #[test]
        fn second_listed_pair() {
            assert_eq!(
                fewest_combined_steps([
                    "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51",
                    "U98,R91,D20,R16,D67,R40,U7,R15,U6,R7",
                ]),
                Some(410)
            );
        }

        #[test]
        fn illustrated_example() {
            assert_eq!(
                fewest_combined_steps(["R8,U5,L5,D3", "U7,R6,D4,L4"]),
                Some(30)
            );
        }
    }
}

mod day4_examples {
    use aoc2019::password::{is_valid_password, SIX_DIGIT_BOUNDS};

    #[test]
    fn listed_codes() {
        assert!(is_valid_password(112233, &SIX_DIGIT_BOUNDS));
        assert!(is_valid_password(111122, &SIX_DIGIT_BOUNDS));
        assert!(!is_valid_password(111111, &SIX_DIGIT_BOUNDS));
        assert!(!is_valid_password(223450, &SIX_DIGIT_BOUNDS));
        assert!(!is_valid_password(123789, &SIX_DIGIT_BOUNDS));
        assert!(!is_valid_password(123444, &SIX_DIGIT_BOUNDS));
    }
}

mod day6_examples {
    use aoc2019::orbits::OrbitMap;

    const EXAMPLE: &str = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L";

    mod part1 {
        use super::*;

        #[test]
        fn orbit_count_checksum() {
            let map: OrbitMap = EXAMPLE.parse().unwrap();
            assert_eq!(map.total_orbits(), 42);
        }
    }

    mod part2 {
        use super::*;

        #[test]
        fn transfers_to_santa() {
            let input = format!("{EXAMPLE}\nK)YOU\nI)SAN");
            let map: OrbitMap = input.parse().unwrap();
            assert_eq!(map.transfers_between("YOU", "SAN"), Some(4));
        }
    }
}

#[derive(Debug, PartialEq)]
struct Awaiting {
    #[allow(dead_code)]
    output: Vec<i64>,
}
