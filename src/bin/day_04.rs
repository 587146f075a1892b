// SPDX-License-Identifier: 0BSD

//! A solution to Advent of Code 2019 Day 4: counting valid passwords.
//!
//! The puzzle input is a pair of bounds rather than a file; the assigned ones
//! are baked in as defaults. The single validator already enforces the
//! stricter standalone-pair rule, so there is one count to report.

use aoc2019::password::count_valid;
use clap::Parser;
use std::time::Instant;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AoC 2019 day 4: Secure Container", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 152085)]
    #[arg(help = "Lower bound of the password range, inclusive")]
    lower: u32,
    #[arg(long, default_value_t = 670283)]
    #[arg(help = "Upper bound of the password range, inclusive")]
    upper: u32,
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    println!("part 1: {}", count_valid(args.lower..=args.upper));
    println!("\n[elapsed time: {} ms]", start.elapsed().as_millis());
}
