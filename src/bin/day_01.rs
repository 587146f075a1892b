// SPDX-License-Identifier: 0BSD

//! A solution to Advent of Code 2019 Day 1: fuel for the modules.

use aoc2019::fuel::{fuel_for_mass, total_fuel_for_mass};
use clap::Parser;
use std::fs::read_to_string;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AoC 2019 day 1: The Tyranny of the Rocket Equation", long_about = None)]
struct Args {
    #[arg(help = "File containing the puzzle input, one module mass per line")]
    #[arg(default_value = "inputs/day_01.txt")]
    input: PathBuf,
}

fn part1(masses: &[i64]) -> i64 {
    masses.iter().copied().map(fuel_for_mass).sum()
}

fn part2(masses: &[i64]) -> i64 {
    masses.iter().copied().map(total_fuel_for_mass).sum()
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    let input = read_to_string(&args.input)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", args.input.display()));
    let masses: Vec<i64> = input
        .lines()
        .map(|line| line.trim().parse().expect("each line must be a mass"))
        .collect();

    println!("part 1: {}", part1(&masses));
    println!("part 2: {}", part2(&masses));
    println!("\n[elapsed time: {} ms]", start.elapsed().as_millis());
}
