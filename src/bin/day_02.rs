// SPDX-License-Identifier: 0BSD

//! A solution to Advent of Code 2019 Day 2: restoring the gravity assist program.

use aoc2019::intcode::parse_program;
use aoc2019::prelude::*;
use clap::Parser;
use std::fs::read_to_string;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AoC 2019 day 2: 1202 Program Alarm", long_about = None)]
struct Args {
    #[arg(help = "File containing the intcode program")]
    #[arg(default_value = "inputs/day_02.txt")]
    input: PathBuf,
    #[arg(short, long)]
    #[arg(help = "Print the part-1 instruction trace to stderr")]
    verbose: bool,
}

fn part1(mut i: Interpreter, verbose: bool) -> i64 {
    i[1] = 12;
    i[2] = 2;
    if verbose {
        i.start_trace();
    }
    let (output, state) = i.run_through_inputs(empty()).unwrap();
    assert_eq!(state, State::Halted, "intcode did not run to completion");
    assert!(output.is_empty(), "intcode had unexpected output");
    if let Some(trace) = i.end_trace() {
        for instr in &trace.0 {
            eprintln!("{instr}");
        }
    }
    i[0]
}

fn part2(base_interp: &Interpreter) -> i64 {
    for noun in 0..=99 {
        for verb in 0..=99 {
            let mut i = base_interp.clone();
            i[1] = noun;
            i[2] = verb;
            let (output, state) = i.run_through_inputs(empty()).unwrap();
            assert_eq!(state, State::Halted, "intcode did not run to completion");
            assert!(output.is_empty(), "intcode had unexpected output");
            if i[0] == 19690720 {
                return 100 * noun + verb;
            }
        }
    }
    panic!("no answer found for part 2");
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    let input = read_to_string(&args.input)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", args.input.display()));
    let code = parse_program(&input).expect("input must be comma-separated integers");
    let interpreter = Interpreter::new(code);

    println!("part 1: {}", part1(interpreter.clone(), args.verbose));
    println!("part 2: {}", part2(&interpreter));
    println!("\n[elapsed time: {} ms]", start.elapsed().as_millis());
}
