// SPDX-License-Identifier: 0BSD

//! A solution to Advent of Code 2019 Day 5: the TEST diagnostic program.
//!
//! With only the five basic opcodes available, the part-2 diagnostic (which
//! needs jumps and comparisons) cannot run; the program reports the part-1
//! diagnostic code only.

use aoc2019::intcode::parse_program;
use aoc2019::prelude::*;
use clap::Parser;
use std::fs::read_to_string;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AoC 2019 day 5: Sunny with a Chance of Asteroids", long_about = None)]
struct Args {
    #[arg(help = "File containing the intcode program")]
    #[arg(default_value = "inputs/day_05.txt")]
    input: PathBuf,
    #[arg(short, long)]
    #[arg(help = "Print the instruction trace to stderr")]
    verbose: bool,
}

fn part1(mut i: Interpreter, verbose: bool) -> i64 {
    if verbose {
        i.start_trace();
    }
    let (mut outputs, State::Halted) = i.run_through_inputs([1]).unwrap() else {
        panic!("diagnostic ran out of input");
    };
    if let Some(trace) = i.end_trace() {
        for instr in &trace.0 {
            eprintln!("{instr}");
        }
    }
    let diagnostic = outputs.pop().expect("diagnostic produced no output");
    assert!(outputs.into_iter().all(|i| i == 0), "diagnostic failed");

    diagnostic
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    let input = read_to_string(&args.input)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", args.input.display()));
    let code = parse_program(&input).expect("input must be comma-separated integers");
    let interpreter = Interpreter::new(code);

    println!("part 1: {}", part1(interpreter, args.verbose));
    println!("\n[elapsed time: {} ms]", start.elapsed().as_millis());
}
