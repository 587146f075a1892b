// SPDX-License-Identifier: 0BSD

//! A solution to Advent of Code 2019 Day 3: crossed wires.

use aoc2019::wires::{closest_crossing_distance, fewest_combined_steps};
use clap::Parser;
use std::fs::read_to_string;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AoC 2019 day 3: Crossed Wires", long_about = None)]
struct Args {
    #[arg(help = "File containing one comma-separated instruction line per wire")]
    #[arg(default_value = "inputs/day_03.txt")]
    input: PathBuf,
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    let input = read_to_string(&args.input)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", args.input.display()));

    let distance = closest_crossing_distance(input.lines()).expect("the wires never cross");
    println!("part 1: {distance}");

    let steps = fewest_combined_steps(input.lines()).expect("the wires never cross");
    println!("part 2: {steps}");

    println!("\n[elapsed time: {} ms]", start.elapsed().as_millis());
}
