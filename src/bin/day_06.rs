// SPDX-License-Identifier: 0BSD

//! A solution to Advent of Code 2019 Day 6: the orbit map.

use aoc2019::orbits::OrbitMap;
use clap::Parser;
use std::fs::read_to_string;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AoC 2019 day 6: Universal Orbit Map", long_about = None)]
struct Args {
    #[arg(help = "File containing one CENTER)ORBITER entry per line")]
    #[arg(default_value = "inputs/day_06.txt")]
    input: PathBuf,
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    let input = read_to_string(&args.input)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", args.input.display()));
    let map: OrbitMap = input.parse().unwrap_or_else(|e| panic!("{e}"));

    println!("part 1: {}", map.total_orbits());
    println!(
        "part 2: {}",
        map.transfers_between("YOU", "SAN")
            .expect("YOU and SAN must both appear in the map")
    );
    println!("\n[elapsed time: {} ms]", start.elapsed().as_millis());
}
